use crate::{Config, ControlScheme, InputSample, Paddle, Player};
use hecs::World;

/// Apply the frame's input sample to each player's paddle.
///
/// Pointer control writes the pointer position straight through
/// (unbounded; the clamp pass runs afterward). Key control moves a fixed
/// amount per frame; "up" is checked first and wins when both keys are
/// held.
pub fn apply_inputs(world: &mut World, sample: &InputSample, config: &Config) {
    for (_entity, (player, paddle)) in world.query_mut::<(&Player, &mut Paddle)>() {
        match player.control {
            ControlScheme::Pointer => {
                paddle.y = sample.pointer_y;
            }
            ControlScheme::UpDownKeys => {
                if sample.up_held {
                    paddle.y -= config.paddle_key_speed;
                } else if sample.down_held {
                    paddle.y += config.paddle_key_speed;
                }
            }
        }
    }
}

/// Clamp every paddle into the playable band. Runs unconditionally after
/// every move, every frame, regardless of input source.
pub fn limit_paddle_movements(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
