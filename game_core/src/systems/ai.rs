use hecs::World;

use crate::{Ball, Config, MoveQueue, Paddle, Side};

/// Computer opponent for the right paddle.
///
/// Moves toward the ball's vertical centre by `ai_speed` each frame and
/// holds still when the centres line up exactly.
pub fn track_ball(world: &World, config: &Config, queue: &mut MoveQueue) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.rect.center_y());
    let paddle_y = world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == Side::Right)
        .map(|(_e, p)| p.rect.center_y());

    let (Some(ball_y), Some(paddle_y)) = (ball_y, paddle_y) else {
        return;
    };

    if ball_y < paddle_y {
        queue.push_move(Side::Right, -config.ai_speed);
    } else if ball_y > paddle_y {
        queue.push_move(Side::Right, config.ai_speed);
    }
}
