use crate::components::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.increment_left(),
            Side::Right => self.increment_right(),
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system, for real play
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Frames since the last registered ball-paddle hit.
///
/// `None` until the first hit of the run. The count keeps growing after a
/// score; it is only reset by the next hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionCooldown {
    pub frames_since_hit: Option<u32>,
}

impl CollisionCooldown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame
    pub fn tick(&mut self) {
        if let Some(frames) = self.frames_since_hit.as_mut() {
            *frames = frames.saturating_add(1);
        }
    }

    /// Whether a new paddle hit may register this frame
    pub fn is_ready(&self, debounce_frames: u32) -> bool {
        match self.frames_since_hit {
            None => true,
            Some(frames) => frames >= debounce_frames,
        }
    }

    pub fn register_hit(&mut self) {
        self.frames_since_hit = Some(0);
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn record_score(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }

    /// Side that scored this frame, if any
    pub fn scorer(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment_left();
        assert_eq!(score.left, 1);
        score.increment_left();
        assert_eq!(score.left, 2);
    }

    #[test]
    fn test_score_award_right() {
        let mut score = Score::new();
        score.award(Side::Right);
        assert_eq!(score, Score { left: 0, right: 1 });
    }

    #[test]
    fn test_cooldown_starts_at_sentinel() {
        let mut cooldown = CollisionCooldown::new();
        assert!(cooldown.is_ready(10));
        cooldown.tick();
        assert_eq!(cooldown.frames_since_hit, None, "Sentinel does not count");
    }

    #[test]
    fn test_cooldown_waits_debounce_frames() {
        let mut cooldown = CollisionCooldown::new();
        cooldown.register_hit();
        for _ in 0..9 {
            cooldown.tick();
            assert!(!cooldown.is_ready(10));
        }
        cooldown.tick();
        assert!(cooldown.is_ready(10));
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert_eq!(events.scorer(), None);
    }

    #[test]
    fn test_events_scorer() {
        let mut events = Events::new();
        events.record_score(Side::Right);
        assert_eq!(events.scorer(), Some(Side::Right));
    }
}
