//! Fixed timestep play update
//!
//! One call per simulation tick: physics, edge guard, pickups, hazards,
//! goal, then camera follow.

use super::state::{GameEvent, PlaySession, TickOutcome};
use super::viewport::scroll_viewport;
use crate::engine::LevelEngine;
use crate::settings::Settings;

/// Advance a play session by one fixed timestep
pub fn tick(
    session: &mut PlaySession,
    engine: &mut impl LevelEngine,
    settings: &Settings,
    dt: f32,
) -> TickOutcome {
    engine.step(&mut session.player, dt);

    // Keep the player from walking off the left edge of the world
    if session.player.bounds().left < 0.0 {
        session.player.set_left(0.0);
    }

    let contacts = engine.contacts(&session.player.bounds());

    for coin in &contacts.collectibles {
        if session.collect(coin.id, coin.point_value) {
            engine.remove_collectible(coin.id);
            log::debug!(
                "Collected pickup {} (+{}), score {}",
                coin.id,
                coin.point_value,
                session.score
            );
        }
    }

    if contacts.hazard {
        log::info!("Hazard hit on level {} with score {}", session.level, session.score);
        session.push_event(GameEvent::HazardHit {
            score: session.score,
        });
        return TickOutcome::HazardContact;
    }

    if contacts.goal {
        log::info!("Goal reached on level {}", session.level);
        session.push_event(GameEvent::LevelComplete {
            level: session.level,
        });
        return TickOutcome::GoalReached;
    }

    session.viewport = scroll_viewport(
        session.viewport,
        &session.player.bounds(),
        settings.screen,
        &settings.margins,
        session.layout.world_width,
    );

    TickOutcome::Running
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::headless::HeadlessEngine;
    use crate::headless::tests::{corridor, rect};
    use crate::sim::Viewport;
    use glam::Vec2;

    fn start() -> (PlaySession, HeadlessEngine, Settings) {
        let mut engine = HeadlessEngine::from_levels(vec![corridor(), corridor()]);
        let settings = Settings::default();
        let session = PlaySession::start(&mut engine, &settings).unwrap();
        (session, engine, settings)
    }

    fn place_feet(session: &mut PlaySession, x: f32, feet: f32) {
        session.player.center = Vec2::new(x, feet + session.player.size.y * 0.5);
    }

    #[test]
    fn test_fresh_session() {
        let (session, _, settings) = start();
        assert_eq!(session.score, 0);
        assert_eq!(session.level, 1);
        assert_eq!(session.viewport, Viewport::ORIGIN);
        assert_eq!(session.player.center, settings.player.start);
    }

    #[test]
    fn test_pickup_scores_once() {
        let (mut session, mut engine, settings) = start();
        place_feet(&mut session, 210.0, 210.0);

        assert_eq!(tick(&mut session, &mut engine, &settings, SIM_DT), TickOutcome::Running);
        assert_eq!(session.score, 10);
        assert!(session.is_collected(1));
        assert_eq!(
            session.take_events(),
            vec![GameEvent::CoinCollected { id: 1, points: 10 }]
        );

        tick(&mut session, &mut engine, &settings, SIM_DT);
        assert_eq!(session.score, 10);
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn test_left_edge_guard() {
        let (mut session, mut engine, settings) = start();
        place_feet(&mut session, 20.0, 210.0);
        session.player.change.x = -10.0;

        tick(&mut session, &mut engine, &settings, SIM_DT);
        assert_eq!(session.player.bounds().left, 0.0);
        assert_eq!(session.viewport.left, 0);
    }

    #[test]
    fn test_hazard_contact_ends_tick() {
        let (mut session, mut engine, settings) = start();
        session.score = 40;
        place_feet(&mut session, 3020.0, 210.0);

        assert_eq!(
            tick(&mut session, &mut engine, &settings, SIM_DT),
            TickOutcome::HazardContact
        );
        assert_eq!(session.take_events(), vec![GameEvent::HazardHit { score: 40 }]);
    }

    #[test]
    fn test_goal_contact_reports_level() {
        let (mut session, mut engine, settings) = start();
        place_feet(&mut session, 4820.0, 210.0);

        assert_eq!(
            tick(&mut session, &mut engine, &settings, SIM_DT),
            TickOutcome::GoalReached
        );
        assert_eq!(session.take_events(), vec![GameEvent::LevelComplete { level: 1 }]);
    }

    #[test]
    fn test_advance_keeps_score_and_resets_position() {
        let (mut session, mut engine, settings) = start();
        session.score = 85;
        place_feet(&mut session, 4820.0, 210.0);
        session.viewport = Viewport { left: 3900, bottom: 20 };
        session.collect(2, 25);

        session.advance_level(&mut engine, &settings).unwrap();
        assert_eq!(session.level, 2);
        assert_eq!(session.score, 110);
        assert_eq!(session.viewport, Viewport::ORIGIN);
        assert_eq!(session.player.center, settings.player.start);
        assert!(!session.is_collected(2));
    }

    #[test]
    fn test_advance_past_last_level_keeps_session() {
        let mut engine = HeadlessEngine::from_levels(vec![corridor()]);
        let settings = Settings::default();
        let mut session = PlaySession::start(&mut engine, &settings).unwrap();
        session.score = 30;

        let err = session.advance_level(&mut engine, &settings).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(session.level, 1);
        assert_eq!(session.score, 30);
    }

    #[test]
    fn test_viewport_follows_player_right() {
        let (mut session, mut engine, settings) = start();
        place_feet(&mut session, 1000.0, 210.0);

        tick(&mut session, &mut engine, &settings, SIM_DT);
        // right edge 1033 past boundary 700
        assert_eq!(session.viewport.left, 333);
    }

    #[test]
    fn test_walk_collects_along_the_way() {
        let mut level = corridor();
        level.hazards.clear();
        level.goals = vec![rect(1400.0, 210.0, 64.0, 64.0)];
        let mut engine = HeadlessEngine::from_levels(vec![level]);
        let settings = Settings::default();
        let mut session = PlaySession::start(&mut engine, &settings).unwrap();
        place_feet(&mut session, 100.0, 210.0);
        session.player.change.x = settings.player.move_speed;

        let mut outcome = TickOutcome::Running;
        for _ in 0..200 {
            outcome = tick(&mut session, &mut engine, &settings, SIM_DT);
            if outcome != TickOutcome::Running {
                break;
            }
        }
        assert_eq!(outcome, TickOutcome::GoalReached);
        assert_eq!(session.score, 35);
        assert!(session.viewport.left > 0);
    }
}
