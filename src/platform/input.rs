//! Keyboard input as delivered by the host window

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    J,
    L,
    I,
    K,
    Space,
    Enter,
    Escape,
}

impl Key {
    /// Left/right movement keys (arrows or J/L)
    pub fn is_horizontal(self) -> bool {
        matches!(self, Key::Left | Key::J | Key::Right | Key::L)
    }

    /// Climb keys (arrows or I/K)
    pub fn is_vertical(self) -> bool {
        matches!(self, Key::Up | Key::I | Key::Down | Key::K)
    }
}

/// A single key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}
