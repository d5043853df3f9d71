//! A running match: entity state, score and the per-frame driver.

use glam::Vec2;
use hecs::{Entity, World};

use crate::systems::serve::{reset_ball, ServeDirection};
use crate::{
    create_ball, create_paddle, step, Ball, Clock, CollisionCooldown, Config, Events, FrameTimer,
    GameRng, InputState, Paddle, Score, ScoreReporter, Side, Time,
};

/// Positions the renderer needs each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSnapshot {
    pub ball: Vec2,
    /// Indexed by `Side::index`
    pub paddles: [Vec2; 2],
}

/// What happened during one call to [`Session::frame`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    pub dt: f32,
    /// Simulated seconds since the session started
    pub elapsed: f32,
    pub scored: Option<Side>,
    pub hit_paddle: bool,
    pub hit_wall: bool,
    pub quit_requested: bool,
}

pub struct Session<C: Clock> {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub cooldown: CollisionCooldown,
    pub events: Events,
    pub rng: GameRng,
    clock: C,
    timer: FrameTimer,
    ball: Entity,
    paddles: [Entity; 2],
}

impl<C: Clock> Session<C> {
    /// Spawn both paddles at mid-height and serve the ball in a random
    /// direction from the center.
    pub fn new(config: Config, mut rng: GameRng, clock: C) -> Self {
        let mut world = World::new();

        let left = create_paddle(&mut world, Side::Left, config.paddle_spawn(Side::Left));
        let right = create_paddle(&mut world, Side::Right, config.paddle_spawn(Side::Right));

        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        reset_ball(&mut ball, ServeDirection::Random, &config, &mut rng);
        let ball = create_ball(&mut world, ball.pos, ball.vel);

        let timer = FrameTimer::new(&clock);

        Self {
            world,
            time: Time::default(),
            config,
            score: Score::new(),
            cooldown: CollisionCooldown::new(),
            events: Events::new(),
            rng,
            clock,
            timer,
            ball,
            paddles: [left, right],
        }
    }

    /// Report the opening score
    pub fn start(&self, reporter: &mut dyn ScoreReporter) {
        reporter.report(&self.score);
    }

    /// Measure the next frame from now, discarding time spent on setup
    pub fn restart_timer(&mut self) {
        self.timer.reset(&self.clock);
    }

    /// Sample the clock and advance the simulation by the elapsed time.
    ///
    /// A quit request still runs the full frame; the caller stops after
    /// presenting it.
    pub fn frame(&mut self, input: &InputState, reporter: &mut dyn ScoreReporter) -> FrameOutcome {
        let dt = self.timer.tick(&self.clock);
        self.advance(dt, input, reporter)
    }

    /// Advance the simulation by an explicit `dt`
    pub fn advance(
        &mut self,
        dt: f32,
        input: &InputState,
        reporter: &mut dyn ScoreReporter,
    ) -> FrameOutcome {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            input,
            &mut self.score,
            &mut self.cooldown,
            &mut self.events,
            &mut self.rng,
        );

        let scored = self.events.scorer();
        if scored.is_some() {
            reporter.report(&self.score);
        }

        FrameOutcome {
            dt,
            elapsed: self.time.now,
            scored,
            hit_paddle: self.events.ball_hit_paddle,
            hit_wall: self.events.ball_hit_wall,
            quit_requested: input.quit_requested(),
        }
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            ball: self.ball().pos,
            paddles: [
                self.paddle(Side::Left).pos,
                self.paddle(Side::Right).pos,
            ],
        }
    }

    pub fn ball(&self) -> Ball {
        *self
            .world
            .get::<&Ball>(self.ball)
            .expect("session ball is never despawned")
    }

    pub fn ball_mut(&mut self) -> hecs::RefMut<'_, Ball> {
        self.world
            .get::<&mut Ball>(self.ball)
            .expect("session ball is never despawned")
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        *self
            .world
            .get::<&Paddle>(self.paddles[side.index()])
            .expect("session paddles are never despawned")
    }

    pub fn paddle_mut(&mut self, side: Side) -> hecs::RefMut<'_, Paddle> {
        self.world
            .get::<&mut Paddle>(self.paddles[side.index()])
            .expect("session paddles are never despawned")
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ManualClock, RecordingReporter};

    #[test]
    fn test_new_session_layout() {
        let session = Session::new(Config::new(), GameRng::new(1), ManualClock::new());

        assert_eq!(session.ball().pos, Vec2::new(400.0, 300.0));
        assert_eq!(session.ball().vel.x.abs(), 200.0);
        assert_eq!(session.paddle(Side::Left).pos, Vec2::new(20.0, 300.0));
        assert_eq!(session.paddle(Side::Right).pos, Vec2::new(780.0, 300.0));
        assert_eq!(session.score, Score::new());
    }

    #[test]
    fn test_start_reports_zero_score() {
        let session = Session::new(Config::new(), GameRng::new(1), ManualClock::new());
        let mut reporter = RecordingReporter::default();
        session.start(&mut reporter);
        assert_eq!(reporter.reports, vec![Score::new()]);
    }

    #[test]
    fn test_frame_uses_clock_delta() {
        let mut session = Session::new(Config::new(), GameRng::new(1), ManualClock::new());
        let mut reporter = RecordingReporter::default();
        let start = session.ball();

        session.clock_mut().advance(0.5);
        let outcome = session.frame(&InputState::new(), &mut reporter);

        assert_eq!(outcome.dt, 0.5);
        assert!(!outcome.quit_requested);
        let moved = session.ball().pos - start.pos;
        assert!((moved - start.vel * 0.5).length() < 1e-3);
        assert_eq!(session.frame_count(), 1);
    }

    #[test]
    fn test_restart_timer_discards_setup_time() {
        let mut session = Session::new(Config::new(), GameRng::new(1), ManualClock::new());
        let mut reporter = RecordingReporter::default();
        let start = session.ball().pos;

        // Slow GPU setup between construction and the first frame
        session.clock_mut().advance(3.0);
        session.restart_timer();
        session.clock_mut().advance(0.01);
        let outcome = session.frame(&InputState::new(), &mut reporter);

        assert!((outcome.dt - 0.01).abs() < 1e-6);
        assert!((session.ball().pos - start).length() < 5.0);
    }

    #[test]
    fn test_outcome_reports_hits_and_elapsed_time() {
        let mut session = Session::new(Config::new(), GameRng::new(1), ManualClock::new());
        let mut reporter = RecordingReporter::default();
        {
            let mut ball = session.ball_mut();
            ball.pos = Vec2::new(24.0, 300.0);
            ball.vel = Vec2::new(-200.0, 0.0);
        }

        let hit = session.advance(0.0, &InputState::new(), &mut reporter);
        assert!(hit.hit_paddle);
        assert!(!hit.hit_wall);

        {
            let mut ball = session.ball_mut();
            ball.pos = Vec2::new(400.0, 599.0);
            ball.vel = Vec2::new(0.0, 100.0);
        }
        let bounce = session.advance(0.25, &InputState::new(), &mut reporter);
        assert!(bounce.hit_wall);
        assert!(!bounce.hit_paddle);
        assert_eq!(bounce.elapsed, 0.25);
    }

    #[test]
    fn test_snapshot_orders_paddles_left_then_right() {
        let mut session = Session::new(Config::new(), GameRng::new(1), ManualClock::new());
        session.paddle_mut(Side::Right).pos.y = 111.0;

        let snapshot = session.snapshot();

        assert_eq!(snapshot.paddles[0], Vec2::new(20.0, 300.0));
        assert_eq!(snapshot.paddles[1], Vec2::new(780.0, 111.0));
        assert_eq!(snapshot.ball, session.ball().pos);
    }
}
