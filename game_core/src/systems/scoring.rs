use hecs::World;

use crate::{Ball, Config, Events, GameRng, Score, Side};

/// Award a point when the ball reaches a side wall and re-serve from centre.
///
/// The left wall is tested first; at most one point is scored per call.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let center = config.arena().center();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.rect.left() <= 0 {
            Side::Right
        } else if ball.rect.right() >= config.arena_width {
            Side::Left
        } else {
            continue;
        };

        score.increment(scorer);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        log::debug!(
            "{} player scores ({} - {})",
            scorer.label(),
            score.left,
            score.right
        );

        ball.reset(center, rng);
    }
}
