use crate::systems::serve::{reset_ball, ServeDirection};
use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Check if the ball reached the left or right edge.
///
/// Touching the left edge scores for the right player and vice versa. The
/// ball is re-centered and served toward the side that conceded.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let Some(scorer) = scoring_side(ball, config) else {
            continue;
        };

        score.award(scorer);
        events.record_score(scorer);

        let direction = match scorer.opponent() {
            Side::Left => ServeDirection::ForceLeft,
            Side::Right => ServeDirection::ForceRight,
        };
        reset_ball(ball, direction, config, rng);

        log::debug!(
            "{:?} scored, now {} - {}; serving {:?}",
            scorer,
            score.left,
            score.right,
            direction
        );
    }
}

/// Side that scores with the ball at its current position, if any
pub fn scoring_side(ball: &Ball, config: &Config) -> Option<Side> {
    let r = config.ball_radius;
    if ball.pos.x - r <= 0.0 {
        Some(Side::Right)
    } else if ball.pos.x + r >= config.arena_width {
        Some(Side::Left)
    } else {
        None
    }
}
