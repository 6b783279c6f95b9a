use crate::{Bindings, Config, GameMode, KeyState, MoveQueue, Side};

/// Turn held keys into paddle moves.
///
/// The left paddle always listens to its keys; the right paddle only when
/// both players are human. Up is queued before down, so holding both keys
/// produces two separately checked moves instead of a cancelled sum.
pub fn ingest_inputs(keys: &KeyState, mode: GameMode, config: &Config, queue: &mut MoveQueue) {
    let Bindings {
        left_up,
        left_down,
        right_up,
        right_down,
        ..
    } = config.bindings;
    let speed = config.paddle_speed;

    if keys.is_held(left_up) {
        queue.push_move(Side::Left, -speed);
    }
    if keys.is_held(left_down) {
        queue.push_move(Side::Left, speed);
    }

    if mode == GameMode::Multiplayer {
        if keys.is_held(right_up) {
            queue.push_move(Side::Right, -speed);
        }
        if keys.is_held(right_down) {
            queue.push_move(Side::Right, speed);
        }
    }
}
