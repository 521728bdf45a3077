//! Game settings and tuning
//!
//! Defaults come from `consts`; a JSON document may override any subset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{ScreenSize, ViewportMargins};

/// Player movement tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Where the player appears at the start of every level
    pub start: Vec2,
    /// Horizontal and ladder speed
    pub move_speed: f32,
    /// Initial upward speed of a jump
    pub jump_speed: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            move_speed: PLAYER_MOVE_SPEED,
            jump_speed: PLAYER_JUMP_SPEED,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Visible area in world units
    pub screen: ScreenSize,
    /// Scroll margins
    pub margins: ViewportMargins,
    pub player: PlayerTuning,
    /// Seconds between title prompt blinks
    pub blink_interval: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: SCREEN_TITLE.to_string(),
            screen: ScreenSize::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32),
            margins: ViewportMargins::default(),
            player: PlayerTuning::default(),
            blink_interval: TITLE_BLINK_INTERVAL,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let settings = Settings::default();
        assert_eq!(settings.screen.width, 1000.0);
        assert_eq!(settings.screen.height, 650.0);
        assert_eq!(settings.margins.left, 50.0);
        assert_eq!(settings.margins.right, 300.0);
        assert_eq!(settings.player.start, Vec2::new(65.0, 256.0));
        assert_eq!(settings.title, "Arcade Platformer");
    }

    #[test]
    fn test_partial_override() {
        let settings =
            Settings::from_json(r#"{ "margins": { "right": 200.0 }, "blink_interval": 0.5 }"#)
                .unwrap();
        assert_eq!(settings.margins.right, 200.0);
        assert_eq!(settings.margins.left, LEFT_VIEWPORT_MARGIN);
        assert_eq!(settings.blink_interval, 0.5);
        assert_eq!(settings.player, PlayerTuning::default());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(Settings::from_json("{ margins: ").is_err());
    }
}
