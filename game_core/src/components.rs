use glam::Vec2;

/// Which end of the field an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

    /// Player label as shown on the banner
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "One",
            Side::Right => "Two",
        }
    }
}

/// Paddle component - X is fixed per side, only Y moves
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// How a player's paddle is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlScheme {
    /// Paddle follows the pointer's vertical position
    Pointer,
    /// Discrete up/down keys move the paddle a fixed amount per frame
    UpDownKeys,
}

/// Player component - binds a side to its input source
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub side: Side,
    pub control: ControlScheme,
}

impl Player {
    pub fn new(side: Side, control: ControlScheme) -> Self {
        Self { side, control }
    }
}

/// Ball component
///
/// `ready` means the ball is resting at field center waiting to be
/// launched; it is true exactly while the session is not in play.
/// `spinning` only drives the sprite animation.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub ready: bool,
    pub spinning: bool,
}

impl Ball {
    /// A ball resting at `center`, waiting for launch
    pub fn resting(center: Vec2) -> Self {
        Self {
            pos: center,
            vel: Vec2::ZERO,
            ready: true,
            spinning: false,
        }
    }

    /// Put the ball back at `center` with zero velocity
    pub fn rest(&mut self, center: Vec2) {
        self.pos = center;
        self.vel = Vec2::ZERO;
        self.ready = true;
        self.spinning = false;
    }

    /// Send the ball off horizontally; `toward` picks the receiving side
    pub fn launch(&mut self, toward: Side, speed: f32) {
        let dir = match toward {
            Side::Left => -1.0,
            Side::Right => 1.0,
        };
        self.vel = Vec2::new(dir * speed, 0.0);
        self.ready = false;
        self.spinning = true;
    }
}
