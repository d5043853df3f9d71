pub mod clock;
pub mod components;
pub mod config;
pub mod input;
pub mod mesh;
pub mod params;
pub mod report;
pub mod resources;
pub mod session;
pub mod systems;

pub use clock::*;
pub use components::*;
pub use config::*;
pub use input::{InputState, Key};
pub use params::*;
pub use report::*;
pub use resources::*;
pub use session::*;

use glam::Vec2;
use hecs::World;
use systems::{
    bounce_off_walls, check_paddle_collision, check_scoring, ingest_inputs, move_ball,
    move_paddles,
};

/// Run one frame of the Pong simulation.
///
/// Order matters: input, wall bounce, scoring (with reset), paddle hits,
/// then integration with the frame's `dt`.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    input: &InputState,
    score: &mut Score,
    cooldown: &mut CollisionCooldown,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();
    cooldown.tick();

    // 1. Held keys become paddle velocities
    ingest_inputs(world, input, config);

    // 2. Top/bottom walls
    bounce_off_walls(world, config, events);

    // 3. Left/right edges score and re-serve
    check_scoring(world, config, score, events, rng);

    // 4. Paddles, debounced
    check_paddle_collision(world, config, cooldown, events);

    // 5. Integrate
    move_paddles(world, time);
    move_ball(world, time);

    time.now += time.dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, pos: Vec2) -> hecs::Entity {
    world.spawn((Paddle::new(side, pos),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
