//! Arcade Platformer entry point
//!
//! Native builds run headless: the bundled levels are played through a
//! scripted key sequence on a fixed-step loop, with view changes, pickups
//! and sound cues going to the log (`RUST_LOG=info`).

use arcade_platformer::LevelError;
use arcade_platformer::audio::SoundEffect;
use arcade_platformer::consts::*;
use arcade_platformer::headless::{ASSETS_DIR, HeadlessEngine};
use arcade_platformer::platform::{FixedStep, Key, KeyEvent};
use arcade_platformer::renderer::DrawList;
use arcade_platformer::sim::GameEvent;
use arcade_platformer::{Settings, ViewKind, ViewMachine};

/// Host frame time (the host presents at 60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Hard stop for the scripted run
const MAX_FRAMES: u32 = 3000;

/// Key events keyed by the frame they arrive on
const SCRIPT: &[(u32, KeyEvent)] = &[
    (30, KeyEvent::Pressed(Key::I)),
    (90, KeyEvent::Pressed(Key::Enter)),
    (100, KeyEvent::Pressed(Key::Right)),
    (300, KeyEvent::Pressed(Key::Escape)),
    (360, KeyEvent::Pressed(Key::Escape)),
    (700, KeyEvent::Released(Key::Right)),
    (720, KeyEvent::Pressed(Key::Space)),
    (760, KeyEvent::Pressed(Key::L)),
];

fn main() {
    env_logger::init();
    log::info!(
        "{} ({}x{}) starting headless",
        SCREEN_TITLE,
        SCREEN_WIDTH,
        SCREEN_HEIGHT
    );

    if let Err(e) = run() {
        log::error!("Fatal: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), LevelError> {
    let engine = HeadlessEngine::from_dir(ASSETS_DIR);
    let mut game = ViewMachine::new(engine, Settings::default());
    let mut clock = FixedStep::default();
    let mut canvas = DrawList::new();
    let mut script = SCRIPT.iter().peekable();
    let last_scripted = SCRIPT.last().map_or(0, |(frame, _)| *frame);
    let mut final_score = None;

    for frame in 0..MAX_FRAMES {
        // Input phase
        while let Some((_, event)) = script.next_if(|(at, _)| *at == frame) {
            game.handle_key(*event)?;
        }

        // Update phase
        for _ in 0..clock.advance(FRAME_DT) {
            game.update(clock.dt)?;
        }

        for event in game.drain_events() {
            if let Some(sound) = SoundEffect::for_event(&event) {
                log::debug!("Sound cue: {}", sound.file_name());
            }
            match event {
                GameEvent::HazardHit { score } | GameEvent::AllLevelsComplete { score } => {
                    final_score = Some(score);
                }
                _ => {}
            }
            log::info!("Frame {frame}: {event:?}");
        }

        // Render phase
        canvas.clear_commands();
        game.render(&mut canvas);
        log::trace!("Frame {frame}: {} draw commands", canvas.commands.len());

        if frame > last_scripted && game.kind() == ViewKind::Title {
            break;
        }
    }

    match final_score {
        Some(score) => log::info!("Run over with score {score}"),
        None => log::info!(
            "Stopped after {} steps in {:?}",
            clock.step_count,
            game.kind()
        ),
    }
    Ok(())
}
