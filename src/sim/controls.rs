//! Player key handling
//!
//! Keys only set the desired motion on the player; the host physics decides
//! where the player actually ends up.

use super::state::{Facing, GameEvent, Player};
use crate::engine::LevelEngine;
use crate::platform::Key;
use crate::settings::PlayerTuning;

/// Apply a key press to the player. Returns `Jumped` when a jump starts.
pub fn key_pressed(
    player: &mut Player,
    key: Key,
    engine: &impl LevelEngine,
    tuning: &PlayerTuning,
) -> Option<GameEvent> {
    match key {
        Key::Left | Key::J => {
            player.change.x = -tuning.move_speed;
            player.facing = Facing::Left;
        }
        Key::Right | Key::L => {
            player.change.x = tuning.move_speed;
            player.facing = Facing::Right;
        }
        Key::Up | Key::I => {
            if engine.is_on_ladder(player) {
                player.change.y = tuning.move_speed;
            }
        }
        Key::Down | Key::K => {
            if engine.is_on_ladder(player) {
                player.change.y = -tuning.move_speed;
            }
        }
        Key::Space => {
            if engine.can_jump(player) {
                player.change.y = tuning.jump_speed;
                return Some(GameEvent::Jumped);
            }
        }
        Key::Enter | Key::Escape => {}
    }
    None
}

/// Apply a key release to the player
pub fn key_released(player: &mut Player, key: Key, engine: &impl LevelEngine) {
    if key.is_horizontal() {
        player.change.x = 0.0;
    } else if key.is_vertical() && engine.is_on_ladder(player) {
        player.change.y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LevelEngine;
    use crate::headless::HeadlessEngine;
    use crate::headless::tests::corridor;
    use glam::Vec2;

    fn engine() -> HeadlessEngine {
        let mut engine = HeadlessEngine::from_levels(vec![corridor()]);
        engine.load_level(1).unwrap();
        engine
    }

    fn player_at(x: f32, feet: f32) -> Player {
        let mut player = Player::new(Vec2::ZERO);
        player.center = Vec2::new(x, feet + player.size.y * 0.5);
        player
    }

    #[test]
    fn test_horizontal_keys_set_speed_and_facing() {
        let engine = engine();
        let tuning = PlayerTuning::default();
        let mut player = player_at(100.0, 210.0);

        key_pressed(&mut player, Key::J, &engine, &tuning);
        assert_eq!(player.change.x, -10.0);
        assert_eq!(player.facing, Facing::Left);

        key_pressed(&mut player, Key::Right, &engine, &tuning);
        assert_eq!(player.change.x, 10.0);
        assert_eq!(player.facing, Facing::Right);

        key_released(&mut player, Key::L, &engine);
        assert_eq!(player.change.x, 0.0);
    }

    #[test]
    fn test_climb_only_on_ladder() {
        let engine = engine();
        let tuning = PlayerTuning::default();

        let mut off_ladder = player_at(100.0, 210.0);
        key_pressed(&mut off_ladder, Key::Up, &engine, &tuning);
        assert_eq!(off_ladder.change.y, 0.0);

        let mut on_ladder = player_at(620.0, 300.0);
        key_pressed(&mut on_ladder, Key::I, &engine, &tuning);
        assert_eq!(on_ladder.change.y, 10.0);
        key_pressed(&mut on_ladder, Key::Down, &engine, &tuning);
        assert_eq!(on_ladder.change.y, -10.0);
        key_released(&mut on_ladder, Key::K, &engine);
        assert_eq!(on_ladder.change.y, 0.0);
    }

    #[test]
    fn test_vertical_release_off_ladder_keeps_fall() {
        let engine = engine();
        let mut player = player_at(100.0, 400.0);
        player.change.y = -5.0;
        key_released(&mut player, Key::Down, &engine);
        assert_eq!(player.change.y, -5.0);
    }

    #[test]
    fn test_jump_requires_ground() {
        let engine = engine();
        let tuning = PlayerTuning::default();

        let mut grounded = player_at(100.0, 210.0);
        assert_eq!(
            key_pressed(&mut grounded, Key::Space, &engine, &tuning),
            Some(GameEvent::Jumped)
        );
        assert_eq!(grounded.change.y, 20.0);

        let mut airborne = player_at(100.0, 400.0);
        assert_eq!(key_pressed(&mut airborne, Key::Space, &engine, &tuning), None);
        assert_eq!(airborne.change.y, 0.0);
    }
}
