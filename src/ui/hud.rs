//! Play screen drawing: level, score and the pause overlay

use glam::Vec2;

use crate::renderer::{Canvas, Color, Text};
use crate::sim::{PlaySession, ScreenSize};

pub const PAUSE_MESSAGE: &str = "PAUSED - ESC TO CONTINUE";

const SCORE_FONT_SIZE: f32 = 40.0;

pub fn render_play(session: &PlaySession, canvas: &mut impl Canvas, screen: ScreenSize) {
    canvas.clear(session.layout.background.unwrap_or(Color::FRESH_AIR));
    canvas.set_viewport(session.viewport, screen);
    canvas.draw_level();

    // Score sticks to the lower-left corner of the visible area
    let corner = Vec2::new(session.viewport.left as f32, session.viewport.bottom as f32);
    let content = format!("Score: {}", session.score);
    canvas.draw_text(Text {
        content: content.clone(),
        position: corner + Vec2::splat(10.0),
        color: Color::BLACK,
        font_size: SCORE_FONT_SIZE,
    });
    canvas.draw_text(Text {
        content,
        position: corner + Vec2::splat(15.0),
        color: Color::WHITE,
        font_size: SCORE_FONT_SIZE,
    });
}

/// Shade the frozen play frame and ask for Escape
pub fn render_pause_overlay(session: &PlaySession, canvas: &mut impl Canvas, screen: ScreenSize) {
    let visible = session.viewport.visible(screen);
    let origin = Vec2::new(visible.left, visible.bottom);
    let size = Vec2::new(screen.width, screen.height);
    canvas.fill_rect(origin, size, Color::PAUSE_SHADE);
    canvas.draw_text(Text {
        content: PAUSE_MESSAGE.to_string(),
        position: origin + Vec2::new(screen.width * 0.25, screen.height * 0.5),
        color: Color::BLACK,
        font_size: 36.0,
    });
}
