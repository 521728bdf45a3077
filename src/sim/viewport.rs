//! Camera follow for a side-scrolling world
//!
//! The viewport only moves when the player gets within a margin of a screen
//! edge, and it never shows anything left of the world origin or right of the
//! world's far edge. Offsets are whole units so sprites stay pixel-aligned.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Visible area size in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Distance from each screen edge at which scrolling starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportMargins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for ViewportMargins {
    fn default() -> Self {
        Self {
            left: LEFT_VIEWPORT_MARGIN,
            right: RIGHT_VIEWPORT_MARGIN,
            top: TOP_VIEWPORT_MARGIN,
            bottom: BOTTOM_VIEWPORT_MARGIN,
        }
    }
}

/// Axis-aligned box in world units (y grows upward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            left: center.x - half.x,
            right: center.x + half.x,
            top: center.y + half.y,
            bottom: center.y - half.y,
        }
    }

    /// True when the boxes share any area (touching edges do not count)
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.bottom < other.top
            && self.top > other.bottom
    }
}

/// Scroll offset of the visible area into the world
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub left: i32,
    pub bottom: i32,
}

impl Viewport {
    pub const ORIGIN: Viewport = Viewport { left: 0, bottom: 0 };

    /// Visible rectangle for a screen of the given size
    pub fn visible(&self, screen: ScreenSize) -> Bounds {
        let left = self.left as f32;
        let bottom = self.bottom as f32;
        Bounds {
            left,
            right: left + screen.width,
            top: bottom + screen.height,
            bottom,
        }
    }
}

/// Compute the viewport for this tick from the player's bounding box.
///
/// Horizontal offset is clamped to `[0, world_width - screen.width]` (or to 0
/// when the world is narrower than the screen). Vertical offset is only held
/// at or above 0, so taller levels scroll freely upward.
pub fn scroll_viewport(
    viewport: Viewport,
    player: &Bounds,
    screen: ScreenSize,
    margins: &ViewportMargins,
    world_width: f32,
) -> Viewport {
    let mut left = viewport.left as f32;
    let mut bottom = viewport.bottom as f32;

    let left_boundary = left + margins.left;
    if player.left < left_boundary {
        left -= left_boundary - player.left;
    }

    let right_boundary = left + screen.width - margins.right;
    if player.right > right_boundary {
        left += player.right - right_boundary;
    }

    let max_left = (world_width - screen.width).max(0.0);
    left = left.clamp(0.0, max_left);

    let top_boundary = bottom + screen.height - margins.top;
    if player.top > top_boundary {
        bottom += player.top - top_boundary;
    }

    let bottom_boundary = bottom + margins.bottom;
    if player.bottom < bottom_boundary {
        bottom -= bottom_boundary - player.bottom;
    }

    bottom = bottom.max(0.0);

    // Truncate, never round
    Viewport {
        left: left as i32,
        bottom: bottom as i32,
    }
}
