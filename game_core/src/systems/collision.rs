use crate::{Ball, CollisionCooldown, Config, Events, Paddle};
use glam::Vec2;
use hecs::World;

/// Which paddle face the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleFace {
    /// Left or right face: reflects horizontal motion
    Side,
    /// Top or bottom face: reflects vertical motion
    Edge,
}

/// Reflect the ball off the top and bottom walls.
///
/// The ball is not pushed back inside; it may overlap the wall by up to one
/// frame of travel.
pub fn bounce_off_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let r = config.ball_radius;
        if ball.pos.y - r <= 0.0 || ball.pos.y + r >= config.arena_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            log::trace!("Wall bounce at {:?}", ball.pos);
        }
    }
}

/// Work out which face of a paddle at `paddle_pos` a ball at `ball_pos` hits.
///
/// Broad phase is an AABB test grown by the ball radius. Narrow phase checks
/// the side faces first, so a ball touching both a side and an edge band
/// counts as a side hit.
pub fn paddle_contact(ball_pos: Vec2, paddle_pos: Vec2, config: &Config) -> Option<PaddleFace> {
    let r = config.ball_radius;
    let hw = config.half_paddle_width();
    let hh = config.half_paddle_height();

    let distance = (ball_pos - paddle_pos).abs();

    if distance.x > hw + r || distance.y > hh + r {
        return None;
    }

    if distance.x <= hw && distance.x >= hw - r {
        Some(PaddleFace::Side)
    } else if distance.y <= hh && distance.y >= hh - r {
        Some(PaddleFace::Edge)
    } else {
        None
    }
}

/// Check the ball against the paddle on its half of the arena.
///
/// Skipped while the cooldown is still running, since one contact usually
/// overlaps for several frames and would otherwise flip the ball repeatedly.
pub fn check_paddle_collision(
    world: &mut World,
    config: &Config,
    cooldown: &mut CollisionCooldown,
    events: &mut Events,
) {
    if !cooldown.is_ready(config.collision_debounce_frames) {
        return;
    }

    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let side = config.candidate_side(ball.pos.x);
        let Some(paddle) = paddles.iter().find(|p| p.side == side) else {
            continue;
        };

        let Some(face) = paddle_contact(ball.pos, paddle.pos, config) else {
            continue;
        };

        match face {
            PaddleFace::Side => ball.vel.x = -ball.vel.x,
            PaddleFace::Edge => ball.vel.y = -ball.vel.y,
        }
        ball.vel.x *= config.ball_speed_increase;

        cooldown.register_hit();
        events.ball_hit_paddle = true;
        log::debug!("Ball hit {:?} paddle ({:?} face), vel {:?}", side, face, ball.vel);
    }
}
