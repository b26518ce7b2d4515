//! The sleeping guard in front of the Blue Room exit.
//!
//! The guard wakes up watching the door. Running distracts him; after that the
//! door is safe but running again gets you caught. Going for the door while he
//! still watches it is just as fatal.

use log::{debug, info};

use super::art::Banner;
use super::error::GameError;
use super::outcome::Progress;
use super::terminal::Terminal;

const CAUGHT: &str = "The guard was faster than he looks and your world goes dark...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Watching,
    Distracted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    Run,
    Door,
}

impl GuardAction {
    /// `run` or `door`, case-insensitive, surrounding whitespace ignored.
    pub fn parse(input: &str) -> Option<GuardAction> {
        match input.trim().to_lowercase().as_str() {
            "run" => Some(GuardAction::Run),
            "door" => Some(GuardAction::Door),
            _ => None,
        }
    }
}

/// Result of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Distracted,
    Escaped,
    Caught,
}

impl GuardState {
    pub fn step(self, action: GuardAction) -> Step {
        match (self, action) {
            (GuardState::Watching, GuardAction::Run) => Step::Distracted,
            (GuardState::Watching, GuardAction::Door) => Step::Caught,
            (GuardState::Distracted, GuardAction::Run) => Step::Caught,
            (GuardState::Distracted, GuardAction::Door) => Step::Escaped,
        }
    }
}

/// Run the encounter until the player escapes or is caught.
///
/// Returns `Progress::Continue` on escape and `Progress::Died` when caught.
/// Unrecognized answers re-prompt and leave the guard as he was.
pub fn encounter<T: Terminal>(term: &mut T) -> Result<Progress, GameError> {
    term.banner(Banner::Guard)?;
    term.say("You approach the guard, he's still sleeping.")?;
    term.say("Suddenly you knock a wooden cask with a mug on it... CRASSH!")?;
    term.say("\n'Hey, you! What you doing 'ere?'")?;

    let mut state = GuardState::Watching;
    loop {
        let raw = term.ask("[run | door] > ")?;
        let Some(action) = GuardAction::parse(&raw) else {
            term.say("Not sure what you meant there... try again.")?;
            continue;
        };
        let step = state.step(action);
        debug!("guard: {:?} + {:?} -> {:?}", state, action, step);
        match step {
            Step::Distracted => {
                term.say("Guard jumps up and looks the other way, missing you entirely.")?;
                state = GuardState::Distracted;
            }
            Step::Escaped => {
                term.say("You just slipped through the door before the guard realised it.")?;
                term.say("You are now outside, home free! Congratulations!")?;
                info!("guard: escaped");
                return Ok(Progress::Continue);
            }
            Step::Caught => {
                info!("guard: caught");
                return Ok(Progress::died(CAUGHT));
            }
        }
    }
}
