//! Scoreboard and banner text, kept as pure functions over the session
//! state so the presentation layer only ever formats and draws.

use crate::config::Config;
use crate::resources::Score;
use crate::session::Phase;

pub fn scoreboard_text(score: &Score) -> String {
    format!("{} - {}", score.left, score.right)
}

/// The scoreboard is only shown while a match is being played out
pub fn scoreboard_visible(phase: Phase) -> bool {
    matches!(phase, Phase::Playing | Phase::RoundOver)
}

/// Banner message for the current state, `None` while hidden.
///
/// The wording of the launch prompt follows the configured trigger so a
/// keyboard build does not tell the player to click.
pub fn banner_text(phase: Phase, score: &Score, config: &Config) -> Option<String> {
    match phase {
        Phase::Idle => {
            let verb = config.launch_trigger.verb();
            if score.left == 0 && score.right == 0 {
                Some(format!("- {verb} to start -"))
            } else {
                Some(format!("- {verb} to continue -"))
            }
        }
        Phase::Playing | Phase::RoundOver => None,
        Phase::GameOver => Some(format!("Player {} Wins", score.leader().label())),
    }
}
