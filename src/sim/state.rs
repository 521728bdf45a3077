//! Play session state
//!
//! Everything that survives a pause lives on `PlaySession`: score, level,
//! viewport and the player's body. Nothing here is global.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::viewport::{Bounds, Viewport};
use crate::consts::*;
use crate::engine::{LevelEngine, LevelLayout};
use crate::error::LevelError;
use crate::settings::Settings;

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The player's body as seen by the host physics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center position in world units
    pub center: Vec2,
    /// Width and height of the collision box
    pub size: Vec2,
    /// Desired motion per tick; the host physics integrates it
    pub change: Vec2,
    pub facing: Facing,
}

impl Player {
    pub fn new(start: Vec2) -> Self {
        Self {
            center: start,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            change: Vec2::ZERO,
            facing: Facing::Right,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_center(self.center, self.size)
    }

    /// Move so the left edge sits at `x`
    pub fn set_left(&mut self, x: f32) {
        self.center.x = x + self.size.x * 0.5;
    }

    /// Put the player back at a level start, standing still
    pub fn reset_to(&mut self, start: Vec2) {
        self.center = start;
        self.change = Vec2::ZERO;
        self.facing = Facing::Right;
    }
}

/// Things the host may want to react to (sounds, HUD flashes, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A pickup was collected
    CoinCollected { id: u32, points: u32 },
    /// The player left the ground
    Jumped,
    /// The goal of `level` was reached
    LevelComplete { level: u32 },
    /// The player touched a hazard; the session is over
    HazardHit { score: u64 },
    /// There is no level after the one just completed
    AllLevelsComplete { score: u64 },
}

/// How a tick ended, from the view stack's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    GoalReached,
    HazardContact,
}

/// A single run through the levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaySession {
    /// Points collected so far (kept across levels)
    pub score: u64,
    /// Current level, starting at 1
    pub level: u32,
    pub viewport: Viewport,
    pub player: Player,
    pub layout: LevelLayout,
    /// Pickups already counted on this level
    collected: HashSet<u32>,
    /// Events raised since the host last drained them
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl PlaySession {
    /// Start a fresh run at the first level
    pub fn start(engine: &mut impl LevelEngine, settings: &Settings) -> Result<Self, LevelError> {
        let layout = engine.load_level(FIRST_LEVEL)?;
        log::info!(
            "Session started on level {} (world width {})",
            FIRST_LEVEL,
            layout.world_width
        );
        Ok(Self {
            score: 0,
            level: FIRST_LEVEL,
            viewport: Viewport::ORIGIN,
            player: Player::new(settings.player.start),
            layout,
            collected: HashSet::new(),
            events: Vec::new(),
        })
    }

    /// Move on to the next level, keeping the score.
    ///
    /// On failure the session is left on the completed level.
    pub fn advance_level(
        &mut self,
        engine: &mut impl LevelEngine,
        settings: &Settings,
    ) -> Result<(), LevelError> {
        let next = self.level + 1;
        let layout = engine.load_level(next)?;
        self.level = next;
        self.layout = layout;
        self.player.reset_to(settings.player.start);
        self.viewport = Viewport::ORIGIN;
        self.collected.clear();
        log::info!("Advanced to level {} with score {}", self.level, self.score);
        Ok(())
    }

    /// Count a pickup once; repeats of the same id are ignored
    pub fn collect(&mut self, id: u32, points: u32) -> bool {
        if !self.collected.insert(id) {
            return false;
        }
        self.score += u64::from(points);
        self.events.push(GameEvent::CoinCollected { id, points });
        true
    }

    pub fn is_collected(&self, id: u32) -> bool {
        self.collected.contains(&id)
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand pending events to the caller
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
