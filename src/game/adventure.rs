//! Session driver: greeting, name, the door loop, the ending and the farewell.

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use super::art::Banner;
use super::error::GameError;
use super::outcome::{Progress, RoomResult};
use super::player::PlayerState;
use super::rooms::{self, Room};
use super::rps::Strategy;
use super::terminal::Terminal;
use crate::config::GameConfig;
use crate::validation::PlayerName;

const NICKNAME: &str = "Rainbow Unicorn";

/// What a finished session hands back to its caller.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub player: PlayerState,
    pub ending: Progress,
}

/// One game session: the opponent strategy for the Green Room and the RNG it draws from.
pub struct Adventure {
    strategy: Strategy,
    rng: StdRng,
}

impl Adventure {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Adventure {
            strategy: config.opponent_strategy(),
            rng,
        }
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Play a whole session on `term` and return the final player state.
    ///
    /// The farewell is printed whatever the ending was: death, victory or a
    /// normal finish.
    pub fn play<T: Terminal>(&mut self, term: &mut T) -> Result<SessionSummary, GameError> {
        let mut player = PlayerState::new();
        term.say("\nWelcome to the game!")?;
        self.introduce(term, &mut player)?;

        let ending = self.explore(term, &mut player)?;
        if ending.is_over() {
            announce(term, &ending)?;
        }

        term.say("\nThe end\n")?;
        term.say(&format!("Thanks for playing, {}", player.name().to_uppercase()))?;
        info!(
            "session over for {:?}: {:?} after {} room(s)",
            player.name(),
            ending,
            player.choices().len()
        );
        Ok(SessionSummary { player, ending })
    }

    /// Ask for a name, then offer the nickname.
    pub fn introduce<T: Terminal>(
        &mut self,
        term: &mut T,
        player: &mut PlayerState,
    ) -> Result<(), GameError> {
        let name = loop {
            match PlayerName::parse(&term.ask("Enter your player name: ")?) {
                Ok(name) => break name,
                Err(e) => term.say(&format!("{}. Try again.", e))?,
            }
        };
        player.rename(name);

        let answer = term.ask(&format!(
            "Your name is {}, is that correct? [Y|N] > ",
            NICKNAME.to_uppercase()
        ))?;
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => {
                adopt_nickname(player);
                term.say(&format!(
                    "You are fun, {}! Let's begin our adventure!",
                    player.name().to_uppercase()
                ))?;
            }
            "n" | "no" => {
                term.say(&format!(
                    "Ok, picky. {} it is. Let's get started on our adventure.",
                    player.name().to_uppercase()
                ))?;
            }
            _ => {
                term.say(&format!(
                    "Trying to be funny? Well, you will now be called {} anyway.",
                    NICKNAME.to_uppercase()
                ))?;
                adopt_nickname(player);
                term.banner(Banner::Smiley)?;
            }
        }
        Ok(())
    }

    /// The door loop: repeat until a room does something other than flee.
    pub fn explore<T: Terminal>(
        &mut self,
        term: &mut T,
        player: &mut PlayerState,
    ) -> Result<Progress, GameError> {
        loop {
            term.banner(Banner::Dungeon)?;
            term.say(
                "You enter a room, and you see a red door to your left \
                 and blue and green doors to your right.",
            )?;
            let answer = term.ask("Do you pick the red door, blue door, or green door? > ")?;
            let Some(room) = Room::from_door_answer(&answer) else {
                term.say(
                    "Sorry, it's either 'red', 'blue', or 'green' as the answer. \
                     You're the weakest link, try again!",
                )?;
                continue;
            };

            match rooms::enter(room, term, player, &self.strategy, &mut self.rng)? {
                RoomResult::Flee => continue,
                RoomResult::Done(progress) => return Ok(progress),
            }
        }
    }
}

fn adopt_nickname(player: &mut PlayerState) {
    match PlayerName::parse(NICKNAME) {
        Ok(name) => player.rename(name),
        Err(e) => warn!("nickname rejected by name rules: {}", e),
    }
}

/// Print the death or victory narration.
fn announce<T: Terminal>(term: &mut T, ending: &Progress) -> Result<(), GameError> {
    match ending {
        Progress::Continue => Ok(()),
        Progress::Died(why) => {
            term.banner(Banner::GameOver)?;
            term.say(&format!("{} Too bad!", why))
        }
        Progress::Won(how) => {
            term.banner(Banner::GameOver)?;
            term.say(&format!("{} The game is over. You won!", how))
        }
    }
}
