use hecs::World;

use crate::{Ball, Events, Paddle, Rect};

/// Reverse the ball horizontally for every paddle it overlaps.
///
/// The ball is not pushed out of the paddle, and overlapping both paddles in
/// the same frame flips twice.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle rects first so the ball can be borrowed mutably
    let paddles: Vec<Rect> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| p.rect)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if ball.rect.intersects(paddle) {
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
            }
        }
    }
}
