use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Which x coordinate decides whether the left or right paddle is tested
/// for a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleSplit {
    /// `arena_height / 2`. This is what the game has always shipped with.
    #[default]
    HalfHeight,
    /// `arena_width / 2`, the true horizontal midline.
    HalfWidth,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_radius: f32,
    pub ball_diameter: f32,
    pub ball_triangles: u32,
    pub ball_speed_increase: f32,
    pub serve_speed: f32,
    pub serve_vy_min: f32,
    pub serve_vy_max: f32,
    pub collision_debounce_frames: u32,
    pub paddle_split: PaddleSplit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            ball_diameter: Params::BALL_DIAMETER,
            ball_triangles: Params::BALL_TRIANGLES,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            serve_speed: Params::SERVE_SPEED,
            serve_vy_min: Params::SERVE_VY_MIN,
            serve_vy_max: Params::SERVE_VY_MAX,
            collision_debounce_frames: Params::COLLISION_DEBOUNCE_FRAMES,
            paddle_split: PaddleSplit::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.arena_width - self.paddle_inset,
        }
    }

    /// Spawn position of a paddle (vertically centered)
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(self.paddle_x(side), self.arena_height / 2.0)
    }

    /// Arena center, where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    pub fn half_paddle_width(&self) -> f32 {
        self.paddle_width / 2.0
    }

    pub fn half_paddle_height(&self) -> f32 {
        self.paddle_height / 2.0
    }

    /// Margin a paddle center keeps from the top and bottom edges
    pub fn paddle_travel_limit(&self) -> f32 {
        self.half_paddle_height() + self.ball_radius
    }

    /// X coordinate separating the left paddle's half from the right's
    pub fn paddle_split_x(&self) -> f32 {
        match self.paddle_split {
            PaddleSplit::HalfHeight => self.arena_height / 2.0,
            PaddleSplit::HalfWidth => self.arena_width / 2.0,
        }
    }

    /// Side whose paddle is tested against a ball at `ball_x`
    pub fn candidate_side(&self, ball_x: f32) -> Side {
        if ball_x > self.paddle_split_x() {
            Side::Right
        } else {
            Side::Left
        }
    }
}
