//! Arcade Platformer - a scrolling tile-map platformer
//!
//! Core modules:
//! - `sim`: Play session (camera follow, scoring, level advance)
//! - `ui`: View stack (title, instructions, play, pause)
//! - `engine`: Seam to the host engine (tile maps, physics, collisions)
//! - `renderer`: Draw commands handed to the host renderer
//! - `platform`: Input keys and fixed-step timing

pub mod audio;
pub mod engine;
pub mod error;
pub mod headless;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use engine::{Collectible, Contacts, LevelEngine, LevelLayout};
pub use error::LevelError;
pub use settings::Settings;
pub use ui::{ViewKind, ViewMachine};

/// Game configuration constants
pub mod consts {
    /// Window dimensions
    pub const SCREEN_WIDTH: u32 = 1000;
    pub const SCREEN_HEIGHT: u32 = 650;
    pub const SCREEN_TITLE: &str = "Arcade Platformer";

    /// Tile map scaling
    pub const MAP_SCALING: f32 = 1.0;

    /// Player defaults (speeds are per tick, as the host physics expects)
    pub const GRAVITY: f32 = 1.0;
    pub const PLAYER_START_X: f32 = 65.0;
    pub const PLAYER_START_Y: f32 = 256.0;
    pub const PLAYER_MOVE_SPEED: f32 = 10.0;
    pub const PLAYER_JUMP_SPEED: f32 = 20.0;
    /// Player collision box (standing alien sprite)
    pub const PLAYER_WIDTH: f32 = 66.0;
    pub const PLAYER_HEIGHT: f32 = 92.0;

    /// How close the player gets to a screen edge before the viewport scrolls
    pub const LEFT_VIEWPORT_MARGIN: f32 = 50.0;
    pub const RIGHT_VIEWPORT_MARGIN: f32 = 300.0;
    pub const TOP_VIEWPORT_MARGIN: f32 = 150.0;
    pub const BOTTOM_VIEWPORT_MARGIN: f32 = 150.0;

    /// Seconds between title prompt blinks
    pub const TITLE_BLINK_INTERVAL: f32 = 1.0;

    /// Fixed simulation timestep (60 Hz, the host's frame rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// First level of a fresh session
    pub const FIRST_LEVEL: u32 = 1;
}
