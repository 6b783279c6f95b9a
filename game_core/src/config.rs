use glam::IVec2;

use crate::{Arena, Bindings, Params, Rect, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: i32,
    pub arena_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub left_paddle_x: i32,
    pub right_paddle_inset: i32,
    pub ball_size: i32,
    pub ball_speed: IVec2,
    pub win_score: u32,
    pub win_margin: u32,
    pub tick_rate: u32,
    /// Step the computer opponent takes per frame
    pub ai_speed: i32,
    pub bindings: Bindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            left_paddle_x: Params::LEFT_PADDLE_X,
            right_paddle_inset: Params::RIGHT_PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed: IVec2::new(Params::BALL_SPEED_X, Params::BALL_SPEED_Y),
            win_score: Params::WIN_SCORE,
            win_margin: Params::WIN_MARGIN,
            tick_rate: Params::TICK_RATE,
            ai_speed: Params::PADDLE_SPEED,
            bindings: Bindings::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ai_speed(mut self, ai_speed: i32) -> Self {
        self.ai_speed = ai_speed;
        self
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Get X position of a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.left_paddle_x,
            Side::Right => self.arena_width - self.right_paddle_inset,
        }
    }

    /// Paddle rectangle at its start position (vertically centred)
    pub fn paddle_spawn(&self, side: Side) -> Rect {
        Rect::new(
            self.paddle_x(side),
            self.arena_height / 2 - self.paddle_height / 2,
            self.paddle_width,
            self.paddle_height,
        )
    }

    /// Ball rectangle at its start position
    pub fn ball_spawn(&self) -> Rect {
        Rect::new(
            self.arena_width / 2 - self.ball_size / 2,
            self.arena_height / 2 - self.ball_size / 2,
            self.ball_size,
            self.ball_size,
        )
    }

    pub fn single_player_button(&self) -> Rect {
        Rect::new(
            self.arena_width / 2 - Params::BUTTON_WIDTH / 2,
            self.arena_height / 2 - Params::BUTTON_OFFSET_Y,
            Params::BUTTON_WIDTH,
            Params::BUTTON_HEIGHT,
        )
    }

    pub fn multiplayer_button(&self) -> Rect {
        Rect::new(
            self.arena_width / 2 - Params::BUTTON_WIDTH / 2,
            self.arena_height / 2 + Params::BUTTON_OFFSET_Y,
            Params::BUTTON_WIDTH,
            Params::BUTTON_HEIGHT,
        )
    }
}
