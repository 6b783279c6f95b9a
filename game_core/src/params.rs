/// Game tuning parameters for table tennis
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels)
    pub const ARENA_WIDTH: i32 = 800;
    pub const ARENA_HEIGHT: i32 = 600;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_SPEED: i32 = 5; // pixels per frame per held key
    pub const LEFT_PADDLE_X: i32 = 20;
    pub const RIGHT_PADDLE_INSET: i32 = 30; // distance of right paddle's left edge from the right wall

    // Ball
    pub const BALL_SIZE: i32 = 15;
    pub const BALL_SPEED_X: i32 = 5;
    pub const BALL_SPEED_Y: i32 = 5;

    // Score
    pub const WIN_SCORE: u32 = 11;
    pub const WIN_MARGIN: u32 = 2; // deuce rule

    // Menu buttons
    pub const BUTTON_WIDTH: i32 = 200;
    pub const BUTTON_HEIGHT: i32 = 50;
    pub const BUTTON_OFFSET_Y: i32 = 50; // top edge distance from the centre line

    // Timing
    pub const TICK_RATE: u32 = 60;
}
