pub mod components;
pub mod config;
pub mod frame;
pub mod fsm;
pub mod geometry;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use frame::*;
pub use fsm::*;
pub use geometry::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one frame of a match in progress
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    config: &Config,
    mode: GameMode,
    keys: &KeyState,
    score: &mut Score,
    events: &mut Events,
    move_queue: &mut MoveQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Held keys become paddle moves
    ingest_inputs(keys, mode, config, move_queue);

    // 2. Computer opponent
    if mode == GameMode::SinglePlayer {
        track_ball(world, config, move_queue);
    }

    // 3. Move paddles, then the ball
    move_paddles(world, move_queue, config);
    move_ball(world, config, events);

    // 4. Ball vs paddles
    check_collisions(world, events);

    // 5. Ball reached a side wall
    check_scoring(world, config, score, events, rng);

    // 6. Match over?
    events.winner = score.has_winner(config.win_score, config.win_margin);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, rect: Rect) -> hecs::Entity {
    world.spawn((Paddle::new(side, rect),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, rect: Rect, vel: glam::IVec2) -> hecs::Entity {
    world.spawn((Ball::new(rect, vel),))
}
