//! View stack: title, instructions, play and pause
//!
//! Exactly one view is active. Views are plain enum variants and every
//! change goes through `transition`, so a paused game is the very same
//! `PlaySession` moved into `View::Pause` and back.

pub mod hud;
pub mod title;

pub use title::TitleScreen;

use crate::engine::LevelEngine;
use crate::error::LevelError;
use crate::platform::{Key, KeyEvent};
use crate::renderer::Canvas;
use crate::settings::Settings;
use crate::sim::{self, GameEvent, PlaySession, TickOutcome, controls};

/// Which view is active, without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Title,
    Instructions,
    Play,
    Pause,
}

/// Inputs that move between views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Confirm,
    Info,
    Cancel,
    HazardContact,
    GoalReached,
}

impl Trigger {
    /// View-level meaning of a key in the given view
    pub fn from_key(view: ViewKind, key: Key) -> Option<Trigger> {
        match (view, key) {
            (ViewKind::Title | ViewKind::Instructions, Key::Enter) => Some(Trigger::Confirm),
            (ViewKind::Title, Key::I) => Some(Trigger::Info),
            (ViewKind::Instructions | ViewKind::Play | ViewKind::Pause, Key::Escape) => {
                Some(Trigger::Cancel)
            }
            _ => None,
        }
    }
}

/// The active view and the state it owns
#[derive(Debug, Clone)]
pub enum View {
    Title(TitleScreen),
    Instructions,
    Play(PlaySession),
    /// A suspended play session; it is drawn but not updated
    Pause(PlaySession),
}

impl Default for View {
    fn default() -> Self {
        View::Title(TitleScreen::default())
    }
}

impl View {
    pub fn kind(&self) -> ViewKind {
        match self {
            View::Title(_) => ViewKind::Title,
            View::Instructions => ViewKind::Instructions,
            View::Play(_) => ViewKind::Play,
            View::Pause(_) => ViewKind::Pause,
        }
    }
}

/// Apply one trigger to a view, returning the view that replaces it.
///
/// Triggers a view does not react to leave it unchanged. Reaching the goal
/// of the last level ends the run and returns to the title.
pub fn transition(
    view: View,
    trigger: Trigger,
    engine: &mut impl LevelEngine,
    settings: &Settings,
    events: &mut Vec<GameEvent>,
) -> Result<View, LevelError> {
    let title = || View::Title(TitleScreen::new(settings.blink_interval));

    match (view, trigger) {
        (View::Title(_) | View::Instructions, Trigger::Confirm) => {
            Ok(View::Play(PlaySession::start(engine, settings)?))
        }
        (View::Title(_), Trigger::Info) => Ok(View::Instructions),
        (View::Instructions, Trigger::Cancel) => Ok(title()),
        (View::Play(session), Trigger::Cancel) => Ok(View::Pause(session)),
        (View::Pause(session), Trigger::Cancel) => Ok(View::Play(session)),
        (View::Play(_), Trigger::HazardContact) => Ok(title()),
        (View::Play(mut session), Trigger::GoalReached) => {
            match session.advance_level(engine, settings) {
                Ok(()) => Ok(View::Play(session)),
                Err(e) if e.is_not_found() => {
                    log::info!(
                        "No level after {}, run finished with score {}",
                        session.level,
                        session.score
                    );
                    events.push(GameEvent::AllLevelsComplete {
                        score: session.score,
                    });
                    Ok(title())
                }
                Err(e) => Err(e),
            }
        }
        (view, _) => Ok(view),
    }
}

/// Drives the active view from host input, ticks and draw requests
pub struct ViewMachine<E: LevelEngine> {
    view: View,
    engine: E,
    settings: Settings,
    events: Vec<GameEvent>,
}

impl<E: LevelEngine> ViewMachine<E> {
    /// Start on the title screen
    pub fn new(engine: E, settings: Settings) -> Self {
        Self {
            view: View::Title(TitleScreen::new(settings.blink_interval)),
            engine,
            settings,
            events: Vec::new(),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn kind(&self) -> ViewKind {
        self.view.kind()
    }

    /// The live or suspended session, if any
    pub fn session(&self) -> Option<&PlaySession> {
        match &self.view {
            View::Play(session) | View::Pause(session) => Some(session),
            View::Title(_) | View::Instructions => None,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> Result<(), LevelError> {
        match event {
            KeyEvent::Pressed(key) => self.key_pressed(key),
            KeyEvent::Released(key) => {
                self.key_released(key);
                Ok(())
            }
        }
    }

    pub fn key_pressed(&mut self, key: Key) -> Result<(), LevelError> {
        if let Some(trigger) = Trigger::from_key(self.kind(), key) {
            return self.fire(trigger);
        }
        if let View::Play(session) = &mut self.view {
            if let Some(event) =
                controls::key_pressed(&mut session.player, key, &self.engine, &self.settings.player)
            {
                self.events.push(event);
            }
        }
        Ok(())
    }

    pub fn key_released(&mut self, key: Key) {
        if let View::Play(session) = &mut self.view {
            controls::key_released(&mut session.player, key, &self.engine);
        }
    }

    /// One fixed-step update of the active view. Pause does nothing.
    pub fn update(&mut self, dt: f32) -> Result<(), LevelError> {
        let outcome = match &mut self.view {
            View::Title(title) => {
                title.update(dt);
                TickOutcome::Running
            }
            View::Instructions | View::Pause(_) => TickOutcome::Running,
            View::Play(session) => {
                let outcome = sim::tick(session, &mut self.engine, &self.settings, dt);
                self.events.extend(session.take_events());
                outcome
            }
        };

        match outcome {
            TickOutcome::Running => Ok(()),
            TickOutcome::GoalReached => self.fire(Trigger::GoalReached),
            TickOutcome::HazardContact => self.fire(Trigger::HazardContact),
        }
    }

    /// Draw the active view. Pause draws the frozen play frame first.
    pub fn render(&self, canvas: &mut impl Canvas) {
        let screen = self.settings.screen;
        match &self.view {
            View::Title(title) => title.render(canvas, screen),
            View::Instructions => title::render_instructions(canvas, screen),
            View::Play(session) => hud::render_play(session, canvas, screen),
            View::Pause(session) => {
                hud::render_play(session, canvas, screen);
                hud::render_pause_overlay(session, canvas, screen);
            }
        }
    }

    fn fire(&mut self, trigger: Trigger) -> Result<(), LevelError> {
        let from = self.view.kind();
        let view = std::mem::take(&mut self.view);
        match transition(view, trigger, &mut self.engine, &self.settings, &mut self.events) {
            Ok(next) => {
                if next.kind() != from {
                    log::info!("View {:?} -> {:?} on {:?}", from, next.kind(), trigger);
                }
                self.view = next;
                Ok(())
            }
            Err(e) => {
                log::error!("Transition {:?} from {:?} failed: {}", trigger, from, e);
                self.view = View::Title(TitleScreen::new(self.settings.blink_interval));
                Err(e)
            }
        }
    }
}
