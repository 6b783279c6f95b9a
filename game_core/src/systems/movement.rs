use hecs::World;

use crate::{Ball, Config, Events, MoveQueue, Paddle};

/// Apply queued paddle moves in order; each move is checked on its own
pub fn move_paddles(world: &mut World, queue: &mut MoveQueue, config: &Config) {
    for (side, dy) in queue.drain() {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.move_by(dy, config.arena_height);
            }
        }
    }
}

/// Move ball based on velocity, bouncing off the top and bottom walls
pub fn move_ball(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(config.arena_height) {
            events.ball_hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Rect, Side};
    use glam::IVec2;

    fn paddle_y(world: &World, side: Side) -> i32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.rect.y)
            .expect("paddle exists")
    }

    #[test]
    fn test_moves_only_the_named_paddle() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, config.paddle_spawn(Side::Left));
        create_paddle(&mut world, Side::Right, config.paddle_spawn(Side::Right));
        let mut queue = MoveQueue::new();
        queue.push_move(Side::Right, 5);

        move_paddles(&mut world, &mut queue, &config);

        assert_eq!(paddle_y(&world, Side::Left), 250);
        assert_eq!(paddle_y(&world, Side::Right), 255);
        assert!(queue.moves.is_empty(), "Queue is drained");
    }

    #[test]
    fn test_sequential_moves_are_clamped_separately() {
        let config = Config::new();
        let mut world = World::new();
        // Top at 3: the up move is rejected, the down move succeeds
        create_paddle(&mut world, Side::Left, Rect::new(20, 3, 10, 100));
        let mut queue = MoveQueue::new();
        queue.push_move(Side::Left, -5);
        queue.push_move(Side::Left, 5);

        move_paddles(&mut world, &mut queue, &config);

        assert_eq!(paddle_y(&world, Side::Left), 8, "Net move is not zero");
    }

    #[test]
    fn test_move_ball_reports_wall_hit() {
        let config = Config::new();
        let mut world = World::new();
        let mut events = Events::new();
        create_ball(&mut world, Rect::new(100, 2, 15, 15), IVec2::new(5, -5));

        move_ball(&mut world, &config, &mut events);

        assert!(events.ball_hit_wall);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, IVec2::new(5, 5));
            assert_eq!(ball.rect.top_left(), IVec2::new(105, -3));
        }
    }
}
