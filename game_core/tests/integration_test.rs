use game_core::input::Key;
use game_core::systems::{serve, ServeDirection};
use game_core::*;
use glam::Vec2;

fn new_session(seed: u64) -> Session<ManualClock> {
    Session::new(Config::new(), GameRng::new(seed), ManualClock::new())
}

fn place_ball(session: &mut Session<ManualClock>, pos: Vec2, vel: Vec2) {
    let mut ball = session.ball_mut();
    ball.pos = pos;
    ball.vel = vel;
}

#[test]
fn test_free_flight_for_one_second() {
    let mut session = new_session(1);
    let mut reporter = RecordingReporter::default();
    place_ball(&mut session, Vec2::new(400.0, 300.0), Vec2::new(200.0, 50.0));

    session.clock_mut().advance(1.0);
    let outcome = session.frame(&InputState::new(), &mut reporter);

    assert_eq!(outcome.scored, None);
    assert_eq!(session.ball().pos, Vec2::new(600.0, 350.0));
    assert_eq!(session.ball().vel, Vec2::new(200.0, 50.0));
    assert!(reporter.reports.is_empty());
}

#[test]
fn test_ball_at_left_edge_scores_for_right_and_resets() {
    let mut session = new_session(9);
    let mut reporter = RecordingReporter::default();
    place_ball(&mut session, Vec2::new(0.5, 300.0), Vec2::new(-200.0, 0.0));

    // Replay the serve the session will draw next
    let mut expected_rng = GameRng::new(9);
    let _opening = serve(ServeDirection::Random, 200.0, -200.0, 200.0, &mut expected_rng.0);
    let expected_vel = serve(ServeDirection::ForceLeft, 200.0, -200.0, 200.0, &mut expected_rng.0);

    let outcome = session.advance(0.0, &InputState::new(), &mut reporter);

    assert_eq!(outcome.scored, Some(Side::Right));
    assert_eq!(session.score, Score { left: 0, right: 1 });
    assert_eq!(session.ball().pos, Vec2::new(400.0, 300.0));
    assert_eq!(session.ball().vel, expected_vel);
    assert_eq!(reporter.reports, vec![Score { left: 0, right: 1 }]);
}

#[test]
fn test_ball_at_right_edge_scores_for_left() {
    let mut session = new_session(2);
    let mut reporter = RecordingReporter::default();
    place_ball(&mut session, Vec2::new(798.0, 300.0), Vec2::new(200.0, 0.0));

    let outcome = session.advance(0.0, &InputState::new(), &mut reporter);

    assert_eq!(outcome.scored, Some(Side::Left));
    assert_eq!(session.score, Score { left: 1, right: 0 });
    assert_eq!(session.ball().pos, Vec2::new(400.0, 300.0));
}

#[test]
fn test_scores_never_decrease_over_many_frames() {
    let mut session = new_session(77);
    let mut reporter = RecordingReporter::default();
    session.start(&mut reporter);

    let mut previous = session.score;
    for _ in 0..5_000 {
        session.clock_mut().advance(1.0 / 60.0);
        session.frame(&InputState::new(), &mut reporter);
        assert!(session.score.left >= previous.left);
        assert!(session.score.right >= previous.right);
        previous = session.score;
    }

    assert!(
        session.score.left + session.score.right > 0,
        "Unattended paddles should concede within 5000 frames"
    );
    assert_eq!(
        reporter.reports.len() as u32,
        1 + session.score.left + session.score.right,
        "Opening report plus one per point"
    );
}

#[test]
fn test_lingering_contact_registers_once() {
    let mut session = new_session(3);
    let mut reporter = RecordingReporter::default();
    // Touching the left paddle's right face
    place_ball(&mut session, Vec2::new(24.0, 300.0), Vec2::new(-200.0, 0.0));

    // dt = 0 keeps the ball in contact for every frame
    for _ in 0..10 {
        session.advance(0.0, &InputState::new(), &mut reporter);
    }
    assert_eq!(session.ball().vel.x, 200.0 * 1.01);

    // Frame 11 is the first allowed to register again
    session.advance(0.0, &InputState::new(), &mut reporter);
    assert_eq!(session.ball().vel.x, -200.0 * 1.01 * 1.01);
}

#[test]
fn test_cooldown_carries_over_a_score() {
    let mut session = new_session(6);
    let mut reporter = RecordingReporter::default();

    // Frame 1: hit the left paddle
    place_ball(&mut session, Vec2::new(24.0, 300.0), Vec2::new(-200.0, 0.0));
    let hit = session.advance(0.0, &InputState::new(), &mut reporter);
    assert!(hit.hit_paddle);
    assert_eq!(session.cooldown.frames_since_hit, Some(0));

    // Frame 2: concede on the left edge
    place_ball(&mut session, Vec2::new(0.5, 300.0), Vec2::new(-200.0, 0.0));
    let scored = session.advance(0.0, &InputState::new(), &mut reporter);
    assert_eq!(scored.scored, Some(Side::Right));
    assert_eq!(session.cooldown.frames_since_hit, Some(1));

    // Frame 3: back in contact, still inside the debounce window
    place_ball(&mut session, Vec2::new(24.0, 300.0), Vec2::new(-200.0, 0.0));
    let contact = session.advance(0.0, &InputState::new(), &mut reporter);

    assert!(!contact.hit_paddle);
    assert_eq!(session.cooldown.frames_since_hit, Some(2));
    assert_eq!(session.ball().vel, Vec2::new(-200.0, 0.0));
}

#[test]
fn test_rally_speeds_ball_up_each_hit() {
    let mut session = new_session(4);
    let mut reporter = RecordingReporter::default();
    place_ball(&mut session, Vec2::new(24.0, 300.0), Vec2::new(-200.0, 0.0));

    let mut speeds = Vec::new();
    for _ in 0..4 {
        for _ in 0..10 {
            session.advance(0.0, &InputState::new(), &mut reporter);
        }
        speeds.push(session.ball().vel.x.abs());
    }

    for pair in speeds.windows(2) {
        assert!(pair[1] > pair[0]);
        assert!((pair[1] / pair[0] - 1.01).abs() < 1e-5);
    }
}

#[test]
fn test_held_up_key_moves_left_paddle() {
    let mut session = new_session(5);
    let mut reporter = RecordingReporter::default();
    let mut input = InputState::new();
    input.key_down(Key::W);

    session.advance(0.1, &input, &mut reporter);

    assert!((session.paddle(Side::Left).pos.y - 330.0).abs() < 1e-3);
    assert_eq!(session.paddle(Side::Right).pos.y, 300.0);
}

#[test]
fn test_held_up_key_at_top_clamps_exactly() {
    let mut session = new_session(6);
    let mut reporter = RecordingReporter::default();
    session.paddle_mut(Side::Right).pos.y = 575.0;
    let mut input = InputState::new();
    input.key_down(Key::Up);

    session.advance(0.016, &input, &mut reporter);

    let paddle = session.paddle(Side::Right);
    assert_eq!(paddle.vel_y, 0.0);
    assert_eq!(paddle.pos.y, 600.0 - (37.5 + 2.5));
}

#[test]
fn test_quit_request_still_runs_frame() {
    let mut session = new_session(8);
    let mut reporter = RecordingReporter::default();
    place_ball(&mut session, Vec2::new(400.0, 300.0), Vec2::new(100.0, 0.0));
    let mut input = InputState::new();
    input.key_down(Key::Escape);

    let outcome = session.advance(0.5, &input, &mut reporter);

    assert!(outcome.quit_requested);
    assert_eq!(session.ball().pos, Vec2::new(450.0, 300.0));
}

#[test]
fn test_same_seed_same_match() {
    let mut a = new_session(1234);
    let mut b = new_session(1234);
    let mut reporter = RecordingReporter::default();

    for _ in 0..2_000 {
        a.advance(1.0 / 60.0, &InputState::new(), &mut reporter);
        b.advance(1.0 / 60.0, &InputState::new(), &mut reporter);
    }

    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.score, b.score);
}
