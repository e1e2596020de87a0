use crate::components::Side;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point_to(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// The side ahead on points. Ties go to the left player, which only
    /// matters for display; a finished match never ties.
    pub fn leader(&self) -> Side {
        if self.left >= self.right {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
    }
}

/// Random number generator, seeded for deterministic tests
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

/// Events that occurred during the last frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub launched: bool,
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub left_scored: bool,
    pub right_scored: bool,
    pub match_over: Option<Side>,
    pub match_reset: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One frame's worth of input state, sampled once per tick.
/// Reads are idempotent; nothing is consumed from a queue.
#[derive(Debug, Clone, Copy)]
pub struct InputSample {
    pub pointer_y: f32,
    pub up_held: bool,
    pub down_held: bool,
    pub launch: bool,
}

impl InputSample {
    pub fn idle(pointer_y: f32) -> Self {
        Self {
            pointer_y,
            up_held: false,
            down_held: false,
            launch: false,
        }
    }
}

/// The recurring speed-increment timer, modeled as an accumulator ticked
/// from the frame callback. Started on entering play, stopped on every
/// exit; `tick` returns how many intervals elapsed this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedRamp {
    running: bool,
    elapsed_ms: f32,
}

impl SpeedRamp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
        self.elapsed_ms = 0.0;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed_ms = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick(&mut self, dt_ms: f32, interval_ms: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.elapsed_ms += dt_ms;
        let mut fires = 0;
        while self.elapsed_ms >= interval_ms {
            self.elapsed_ms -= interval_ms;
            fires += 1;
        }
        fires
    }
}

/// Delay between a round ending and the field accepting the next launch
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundPause {
    remaining_ms: f32,
}

impl RoundPause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, delay_ms: f32) {
        self.remaining_ms = delay_ms;
    }

    /// Returns true once the pause has fully elapsed
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.remaining_ms = (self.remaining_ms - dt_ms).max(0.0);
        self.remaining_ms <= 0.0
    }
}
