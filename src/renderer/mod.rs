//! Draw commands handed to the host renderer
//!
//! Views describe a frame through `Canvas`; the host turns the calls into
//! sprite and text draws. `DrawList` records them instead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{ScreenSize, Viewport};

/// RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0, 255]);
    pub const WHITE: Color = Color([255, 255, 255, 255]);
    pub const INDIGO: Color = Color([75, 0, 130, 255]);
    pub const FRESH_AIR: Color = Color([166, 231, 255, 255]);
    /// Translucent dimming drawn over a paused game
    pub const PAUSE_SHADE: Color = Color([255, 255, 255, 150]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color([r, g, b, 255])
    }
}

/// Full-screen images owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backdrop {
    Title,
    Instructions,
}

/// A line of text in world coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub position: Vec2,
    pub color: Color,
    pub font_size: f32,
}

/// Rendering operations a view may issue
pub trait Canvas {
    /// Map the visible screen onto the world at `viewport`
    fn set_viewport(&mut self, viewport: Viewport, screen: ScreenSize);
    fn clear(&mut self, color: Color);
    fn draw_backdrop(&mut self, backdrop: Backdrop);
    /// Background, walls, ladders, pickups, goals, hazards and player
    fn draw_level(&mut self);
    fn draw_text(&mut self, text: Text);
    /// Fill a rectangle given by its lower-left corner and size
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
}

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetViewport(Viewport),
    Clear(Color),
    Backdrop(Backdrop),
    Level,
    Text(Text),
    FillRect { origin: Vec2, size: Vec2, color: Color },
}

/// Canvas that records calls in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Text content of every recorded text draw
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text(t) => Some(t.content.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for DrawList {
    fn set_viewport(&mut self, viewport: Viewport, _screen: ScreenSize) {
        self.commands.push(DrawCommand::SetViewport(viewport));
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_backdrop(&mut self, backdrop: Backdrop) {
        self.commands.push(DrawCommand::Backdrop(backdrop));
    }

    fn draw_level(&mut self) {
        self.commands.push(DrawCommand::Level);
    }

    fn draw_text(&mut self, text: Text) {
        self.commands.push(DrawCommand::Text(text));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            color,
        });
    }
}
