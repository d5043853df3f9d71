use hecs::World;

use crate::input::{InputState, PaddleKeys};
use crate::{Config, Paddle};

/// Turn held keys into paddle velocities.
///
/// Up is evaluated before down, so holding both moves the paddle down while
/// it is inside its travel range. At the travel limit the paddle is clamped
/// instead of moved.
pub fn ingest_inputs(world: &mut World, input: &InputState, config: &Config) {
    let limit = config.paddle_travel_limit();
    let top = config.arena_height - limit;

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let keys = PaddleKeys::for_side(paddle.side);
        paddle.vel_y = 0.0;

        if input.is_held(keys.up) {
            if paddle.pos.y < top {
                paddle.vel_y = config.paddle_speed;
            } else {
                paddle.pos.y = top;
            }
        }

        if input.is_held(keys.down) {
            if paddle.pos.y > limit {
                paddle.vel_y = -config.paddle_speed;
            } else {
                // Lower clamp lands on the half height, not the travel limit
                paddle.pos.y = config.half_paddle_height();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::{create_paddle, Side};
    use glam::Vec2;

    fn paddle_at(y: f32) -> (World, Config, hecs::Entity) {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, Side::Left, Vec2::new(20.0, y));
        (world, config, entity)
    }

    fn held(keys: &[Key]) -> InputState {
        let mut input = InputState::new();
        for key in keys {
            input.key_down(*key);
        }
        input
    }

    #[test]
    fn test_no_keys_stops_paddle() {
        let (mut world, config, entity) = paddle_at(300.0);
        world.get::<&mut Paddle>(entity).unwrap().vel_y = 123.0;

        ingest_inputs(&mut world, &InputState::new(), &config);

        assert_eq!(world.get::<&Paddle>(entity).unwrap().vel_y, 0.0);
    }

    #[test]
    fn test_up_moves_up_inside_range() {
        let (mut world, config, entity) = paddle_at(300.0);
        ingest_inputs(&mut world, &held(&[Key::W]), &config);
        assert_eq!(world.get::<&Paddle>(entity).unwrap().vel_y, config.paddle_speed);
    }

    #[test]
    fn test_up_at_limit_clamps_and_stays() {
        let (mut world, config, entity) = paddle_at(590.0);
        ingest_inputs(&mut world, &held(&[Key::W]), &config);

        let paddle = *world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.vel_y, 0.0);
        assert_eq!(
            paddle.pos.y,
            config.arena_height - (config.half_paddle_height() + config.ball_radius)
        );
        assert_eq!(paddle.pos.y, 560.0);
    }

    #[test]
    fn test_down_at_limit_clamps_to_half_height() {
        let (mut world, config, entity) = paddle_at(40.0);
        ingest_inputs(&mut world, &held(&[Key::S]), &config);

        let paddle = *world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.vel_y, 0.0);
        assert_eq!(paddle.pos.y, 37.5);
    }

    #[test]
    fn test_both_keys_down_wins() {
        let (mut world, config, entity) = paddle_at(300.0);
        ingest_inputs(&mut world, &held(&[Key::W, Key::S]), &config);
        assert_eq!(
            world.get::<&Paddle>(entity).unwrap().vel_y,
            -config.paddle_speed
        );
    }

    #[test]
    fn test_right_paddle_uses_arrow_keys() {
        let mut world = World::new();
        let config = Config::new();
        let left = create_paddle(&mut world, Side::Left, config.paddle_spawn(Side::Left));
        let right = create_paddle(&mut world, Side::Right, config.paddle_spawn(Side::Right));

        ingest_inputs(&mut world, &held(&[Key::Down]), &config);

        assert_eq!(world.get::<&Paddle>(left).unwrap().vel_y, 0.0);
        assert_eq!(
            world.get::<&Paddle>(right).unwrap().vel_y,
            -config.paddle_speed
        );
    }
}
