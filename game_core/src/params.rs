/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (screen pixels, origin bottom-left)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 75.0;
    pub const PADDLE_SPEED: f32 = 300.0; // pixels per second
    pub const PADDLE_INSET: f32 = 20.0; // distance of paddle center from its edge

    // Ball
    pub const BALL_DIAMETER: f32 = 5.0;
    pub const BALL_RADIUS: f32 = Self::BALL_DIAMETER / 2.0;
    pub const BALL_TRIANGLES: u32 = 20;
    pub const BALL_SPEED_INCREASE: f32 = 1.01; // Multiply x speed on paddle hit

    // Serve
    pub const SERVE_SPEED: f32 = 200.0;
    pub const SERVE_VY_MIN: f32 = -200.0;
    pub const SERVE_VY_MAX: f32 = 200.0;

    // Frames to wait after a paddle hit before another one can register
    pub const COLLISION_DEBOUNCE_FRAMES: u32 = 10;
}
