//! Sound cues
//!
//! The host loads and plays the clips; the game only says which one.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Pickup collected
    Coin,
    /// Player left the ground
    Jump,
    /// Level goal reached
    Victory,
}

impl SoundEffect {
    /// Clip file under the sounds asset directory
    pub fn file_name(self) -> &'static str {
        match self {
            SoundEffect::Coin => "coin.wav",
            SoundEffect::Jump => "jump.wav",
            SoundEffect::Victory => "victory.wav",
        }
    }

    /// The clip that accompanies an event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::CoinCollected { .. } => Some(SoundEffect::Coin),
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::LevelComplete { .. } => Some(SoundEffect::Victory),
            GameEvent::HazardHit { .. } | GameEvent::AllLevelsComplete { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_cues() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::CoinCollected { id: 3, points: 10 }),
            Some(SoundEffect::Coin)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::LevelComplete { level: 1 }).map(SoundEffect::file_name),
            Some("victory.wav")
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::HazardHit { score: 0 }), None);
    }
}
