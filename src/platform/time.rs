//! Fixed timestep accumulator
//!
//! Frame time from the host is banked and spent in `SIM_DT` slices so the
//! update phase always sees the same step size.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame we are willing to simulate in one go (seconds)
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FixedStep {
    pub dt: f32,
    pub max_substeps: u32,
    accumulator: f32,
    /// Total fixed steps taken
    pub step_count: u64,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FixedStep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            max_substeps: MAX_SUBSTEPS,
            accumulator: 0.0,
            step_count: 0,
        }
    }

    /// Bank `frame_dt` seconds and return how many steps to run this frame
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < self.max_substeps {
            self.accumulator -= self.dt;
            steps += 1;
        }
        if steps == self.max_substeps && self.accumulator >= self.dt {
            log::warn!(
                "Dropping {:.1}ms of simulation time after {} substeps",
                self.accumulator * 1000.0,
                steps
            );
            self.accumulator = 0.0;
        }
        self.step_count += u64::from(steps);
        steps
    }

    /// Fraction of a step left in the bank
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_accumulate_across_frames() {
        let mut clock = FixedStep::new(0.01);
        assert_eq!(clock.advance(0.004), 0);
        assert_eq!(clock.advance(0.004), 0);
        assert_eq!(clock.advance(0.004), 1);
        assert!(clock.alpha() < 0.5);
        assert_eq!(clock.step_count, 1);
    }

    #[test]
    fn test_long_frames_are_capped() {
        let mut clock = FixedStep::new(0.01);
        clock.max_substeps = 4;
        assert_eq!(clock.advance(5.0), 4);
        assert_eq!(clock.alpha(), 0.0);
    }

    #[test]
    fn test_negative_frame_time_is_ignored() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.advance(-1.0), 0);
    }
}
