use crate::components::Side;
use crate::params::Params;
use glam::Vec2;

/// Which input event releases the ball (and restarts a finished match).
/// The game's revisions shipped both; it is a product knob, not a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchTrigger {
    PointerPress,
    EnterKey,
}

impl LaunchTrigger {
    /// Verb used in the intro banner
    pub fn verb(self) -> &'static str {
        match self {
            LaunchTrigger::PointerPress => "click",
            LaunchTrigger::EnterKey => "press enter",
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_offset: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_key_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_start: f32,
    pub ball_speed_increment: f32,
    pub ramp_interval_ms: f32,
    pub deflect_per_offset: f32,
    pub win_score: u8,
    pub round_pause_ms: f32,
    pub launch_trigger: LaunchTrigger,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_offset: Params::PADDLE_OFFSET,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_key_speed: Params::PADDLE_KEY_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_start: Params::BALL_SPEED_START,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            ramp_interval_ms: Params::RAMP_INTERVAL_MS,
            deflect_per_offset: Params::DEFLECT_PER_OFFSET,
            win_score: Params::WIN_SCORE,
            round_pause_ms: Params::ROUND_PAUSE_MS,
            launch_trigger: LaunchTrigger::PointerPress,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center of the play-field, where the ball rests
    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Fixed X position for a side's paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_offset,
            Side::Right => self.field_width - self.paddle_offset,
        }
    }

    /// Clamp a paddle Y into the playable band
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(self.paddle_margin, self.field_height - self.paddle_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_x_per_side() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 100.0);
        assert_eq!(config.paddle_x(Side::Right), 1180.0);
    }

    #[test]
    fn test_clamp_paddle_y_band() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-500.0), 30.0);
        assert_eq!(config.clamp_paddle_y(5000.0), 690.0);
        assert_eq!(config.clamp_paddle_y(360.0), 360.0);
    }

    #[test]
    fn test_clamp_paddle_y_is_idempotent() {
        let config = Config::new();
        for y in [-100.0, 0.0, 29.9, 360.0, 719.0, 10_000.0] {
            let once = config.clamp_paddle_y(y);
            assert_eq!(config.clamp_paddle_y(once), once);
        }
    }

    #[test]
    fn test_launch_trigger_verbs() {
        assert_eq!(LaunchTrigger::PointerPress.verb(), "click");
        assert_eq!(LaunchTrigger::EnterKey.verb(), "press enter");
    }
}
