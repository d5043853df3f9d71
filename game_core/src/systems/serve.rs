use glam::Vec2;
use rand::Rng;

use crate::{Ball, Config, GameRng};

/// Horizontal direction of a serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeDirection {
    /// Coin flip, used for the opening serve
    Random,
    ForceLeft,
    ForceRight,
}

/// Pick a serve velocity.
///
/// `x` is `±speed` (sign from `direction`), `y` is uniform in `[y_min, y_max]`.
pub fn serve<R: Rng>(
    direction: ServeDirection,
    speed: f32,
    y_min: f32,
    y_max: f32,
    rng: &mut R,
) -> Vec2 {
    let vx = match direction {
        ServeDirection::ForceLeft => -speed,
        ServeDirection::ForceRight => speed,
        ServeDirection::Random => {
            if rng.gen_bool(0.5) {
                speed
            } else {
                -speed
            }
        }
    };

    let vy = if y_min < y_max {
        rng.gen_range(y_min..=y_max)
    } else {
        y_min
    };

    Vec2::new(vx, vy)
}

/// Put the ball back at the arena center with a fresh serve
pub fn reset_ball(ball: &mut Ball, direction: ServeDirection, config: &Config, rng: &mut GameRng) {
    ball.pos = config.center();
    ball.vel = serve(
        direction,
        config.serve_speed,
        config.serve_vy_min,
        config.serve_vy_max,
        &mut rng.0,
    );
}
