use crate::{Ball, Paddle, Time};
use hecs::World;

/// Apply paddle movement from the velocity input set this frame
pub fn move_paddles(world: &mut World, time: &Time) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos.y += paddle.vel_y * time.dt;
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}
