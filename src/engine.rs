//! Seam to the host game engine
//!
//! Tile maps, sprite lists, physics and overlap tests all live in the host.
//! The play session only asks for what it needs through `LevelEngine`.

use serde::{Deserialize, Serialize};

use crate::consts::MAP_SCALING;
use crate::error::LevelError;
use crate::renderer::Color;
use crate::sim::{Bounds, Player};

/// Asset name for a level's tile map, e.g. `platform_level_01`
pub fn level_map_name(level: u32) -> String {
    format!("platform_level_{level:02}")
}

/// What the session needs to know about a freshly loaded level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    /// Scrollable width in world units
    pub world_width: f32,
    /// Clear colour for the level, if the map sets one
    pub background: Option<Color>,
}

impl LevelLayout {
    /// Layout for a tile map of `width_tiles` columns.
    ///
    /// The last column is not scrollable; the right viewport edge stops at
    /// the left edge of that column.
    pub fn from_tiles(width_tiles: u32, tile_width: f32, background: Option<Color>) -> Self {
        let world_width = width_tiles.saturating_sub(1) as f32 * tile_width * MAP_SCALING;
        Self {
            world_width,
            background,
        }
    }
}

/// A pickup the player is currently touching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collectible {
    /// Stable id within the level
    pub id: u32,
    /// Points awarded on pickup
    pub point_value: u32,
}

/// Overlaps reported by the host for the player's current bounds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contacts {
    pub collectibles: Vec<Collectible>,
    pub goal: bool,
    pub hazard: bool,
}

impl Contacts {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Host engine operations used by the play session
pub trait LevelEngine {
    /// Load (or reload) the sprite lists and physics for `level`
    fn load_level(&mut self, level: u32) -> Result<LevelLayout, LevelError>;

    /// Advance animation and physics by one tick, moving the player
    fn step(&mut self, player: &mut Player, dt: f32);

    /// True when the player stands on something it can jump from
    fn can_jump(&self, player: &Player) -> bool;

    /// True when the player overlaps a climbable tile
    fn is_on_ladder(&self, player: &Player) -> bool;

    /// Everything the player's box overlaps right now
    fn contacts(&self, player: &Bounds) -> Contacts;

    /// Drop a collected pickup from the level's sprite lists
    fn remove_collectible(&mut self, id: u32);
}
