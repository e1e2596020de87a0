/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 1280.0;
    pub const FIELD_HEIGHT: f32 = 720.0;

    // Paddle
    pub const PADDLE_OFFSET: f32 = 100.0; // X inset from each edge
    pub const PADDLE_WIDTH: f32 = 22.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_MARGIN: f32 = 30.0; // Y clamp margin, both ends
    pub const PADDLE_KEY_SPEED: f32 = 18.0; // units per frame for key control

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_START: f32 = 600.0; // units per second
    pub const BALL_SPEED_INCREMENT: f32 = 100.0; // added to |vx| per ramp firing
    pub const RAMP_INTERVAL_MS: f32 = 1000.0;

    // Paddle deflection
    pub const DEFLECT_PER_OFFSET: f32 = 10.0;
    pub const NUDGE_MIN: f32 = 2.0;
    pub const NUDGE_MAX: f32 = 10.0;

    // Match
    pub const WIN_SCORE: u8 = 3;
    pub const ROUND_PAUSE_MS: f32 = 800.0;

    // Physics
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz micro-step
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
