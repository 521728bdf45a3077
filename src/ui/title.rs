//! Title and instructions screens

use glam::Vec2;

use crate::consts::TITLE_BLINK_INTERVAL;
use crate::renderer::{Backdrop, Canvas, Color, Text};
use crate::sim::{ScreenSize, Viewport};

pub const TITLE_PROMPT: &str = "Enter to Start | I for Instructions";

/// Title screen with a blinking start prompt
#[derive(Debug, Clone, PartialEq)]
pub struct TitleScreen {
    /// Seconds until the prompt toggles
    pub display_timer: f32,
    pub show_prompt: bool,
    interval: f32,
}

impl Default for TitleScreen {
    fn default() -> Self {
        Self::new(TITLE_BLINK_INTERVAL)
    }
}

impl TitleScreen {
    pub fn new(interval: f32) -> Self {
        Self {
            display_timer: interval,
            show_prompt: false,
            interval,
        }
    }

    /// Count down and toggle the prompt each time the timer runs out
    pub fn update(&mut self, dt: f32) {
        self.display_timer -= dt;
        if self.display_timer < 0.0 {
            self.show_prompt = !self.show_prompt;
            self.display_timer = self.interval;
        }
    }

    pub fn render(&self, canvas: &mut impl Canvas, screen: ScreenSize) {
        canvas.set_viewport(Viewport::ORIGIN, screen);
        canvas.draw_backdrop(Backdrop::Title);
        if self.show_prompt {
            canvas.draw_text(Text {
                content: TITLE_PROMPT.to_string(),
                position: Vec2::new(100.0, 220.0),
                color: Color::INDIGO,
                font_size: 40.0,
            });
        }
    }
}

pub fn render_instructions(canvas: &mut impl Canvas, screen: ScreenSize) {
    canvas.set_viewport(Viewport::ORIGIN, screen);
    canvas.draw_backdrop(Backdrop::Instructions);
}
