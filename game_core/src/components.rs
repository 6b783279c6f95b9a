use glam::IVec2;

use crate::Rect;

/// Which end of the table a paddle or player belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
}

impl Paddle {
    pub fn new(side: Side, rect: Rect) -> Self {
        Self { side, rect }
    }

    /// Shift vertically by `dy` if the paddle stays strictly inside the arena.
    ///
    /// A move that would make the paddle touch or cross the top or bottom
    /// edge is rejected whole rather than clamped. Returns whether it moved.
    pub fn move_by(&mut self, dy: i32, arena_height: i32) -> bool {
        if self.rect.top() + dy > 0 && self.rect.bottom() + dy < arena_height {
            self.rect.y += dy;
            true
        } else {
            false
        }
    }
}

/// Ball component - the table tennis ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub rect: Rect,
    pub vel: IVec2,
}

impl Ball {
    pub fn new(rect: Rect, vel: IVec2) -> Self {
        Self { rect, vel }
    }

    /// Advance one frame and bounce off the top/bottom walls.
    ///
    /// The wall test runs after the move, so the ball may sit past a wall for
    /// one frame. Returns true when the vertical velocity was flipped.
    pub fn advance(&mut self, arena_height: i32) -> bool {
        self.rect.translate(self.vel);

        if self.rect.top() <= 0 || self.rect.bottom() >= arena_height {
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    /// Reset ball to `center`, flipping each velocity sign with even odds
    pub fn reset(&mut self, center: IVec2, rng: &mut crate::GameRng) {
        use rand::Rng;

        self.rect.set_center(center);
        if rng.0.gen_bool(0.5) {
            self.vel.x = -self.vel.x;
        }
        if rng.0.gen_bool(0.5) {
            self.vel.y = -self.vel.y;
        }
    }
}
