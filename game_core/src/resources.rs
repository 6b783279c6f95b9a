use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// A side wins on reaching `win_score` while leading by at least `margin`.
    /// Left is checked first.
    pub fn has_winner(&self, win_score: u32, margin: u32) -> Option<Side> {
        [Side::Left, Side::Right].into_iter().find(|&side| {
            let own = self.get(side);
            own >= win_score && own >= self.get(side.opponent()) + margin
        })
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub winner: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Paddle moves requested this frame, applied in order
#[derive(Debug, Clone, Default)]
pub struct MoveQueue {
    pub moves: Vec<(Side, i32)>, // (paddle, dy)
}

impl MoveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_move(&mut self, side: Side, dy: i32) {
        self.moves.push((side, dy));
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, (Side, i32)> {
        self.moves.drain(..)
    }
}
