//! Scripted rooms behind each door.
//!
//! Every room follows the same entry script: move the player in, apply its
//! health change and item grant, record the visit, show the player info, then
//! resolve its one decision point into a [`RoomResult`].
//!
//! | Room   | Health | Item           | Decision                                   |
//! |--------|--------|----------------|--------------------------------------------|
//! | Red    | -20    | Truth Scroll   | "flee" returns to the doors, else death    |
//! | Blue   | +30    | Crystal Mirror | treasure flavor, then the guard            |
//! | Green  | 0      | Emerald Amulet | RPS: win is victory, anything else flees   |
//! | Purple | +10    | none           | rest or leave, always finishes normally    |

use log::info;
use rand::Rng;

use super::art::Banner;
use super::error::GameError;
use super::guard;
use super::outcome::{Progress, RoomResult};
use super::player::{Location, PlayerState};
use super::rps::{self, RoundOutcome, Strategy, Verdict};
use super::terminal::Terminal;

pub const TRUTH_SCROLL: &str = "Truth Scroll";
pub const CRYSTAL_MIRROR: &str = "Crystal Mirror";
pub const EMERALD_AMULET: &str = "Emerald Amulet";

const RED_DAMAGE: i32 = 20;
const BLUE_HEALING: i32 = 30;
const PURPLE_HEALING: i32 = 10;

const TREASURE: [&str; 4] = ["diamonds", "gold", "silver", "sword"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Room {
    Red,
    Blue,
    Green,
    Purple,
}

impl Room {
    pub const ALL: [Room; 4] = [Room::Red, Room::Blue, Room::Green, Room::Purple];

    /// The word a door answer has to start with.
    pub fn door_word(self) -> &'static str {
        match self {
            Room::Red => "red",
            Room::Blue => "blue",
            Room::Green => "green",
            Room::Purple => "purple",
        }
    }

    pub fn location(self) -> Location {
        match self {
            Room::Red => Location::RedRoom,
            Room::Blue => Location::BlueRoom,
            Room::Green => Location::GreenRoom,
            Room::Purple => Location::PurpleRoom,
        }
    }

    /// Match a door answer by prefix, ignoring case and surrounding whitespace.
    /// "Red door", "blue" and "GREEN!" all select a room; "door" does not.
    pub fn from_door_answer(input: &str) -> Option<Room> {
        let answer = input.trim().to_lowercase();
        Room::ALL
            .into_iter()
            .find(|room| answer.starts_with(room.door_word()))
    }
}

/// Run the entry script and decision point of `room`.
pub fn enter<T: Terminal, R: Rng>(
    room: Room,
    term: &mut T,
    player: &mut PlayerState,
    strategy: &Strategy,
    rng: &mut R,
) -> Result<RoomResult, GameError> {
    info!("entering {}", room.location());
    match room {
        Room::Red => red_room(term, player),
        Room::Blue => blue_room(term, player),
        Room::Green => green_room(term, player, strategy, rng),
        Room::Purple => purple_room(term, player),
    }
}

fn show_player_info<T: Terminal>(term: &mut T, player: &PlayerState) -> Result<(), GameError> {
    term.say(&format!("\n{}", player))
}

pub fn red_room<T: Terminal>(
    term: &mut T,
    player: &mut PlayerState,
) -> Result<RoomResult, GameError> {
    term.banner(Banner::Monster)?;
    term.say("\nYou have entered the Red Room.")?;
    player.visit(Location::RedRoom);
    player.adjust_health(-RED_DAMAGE);
    if player.grant(TRUTH_SCROLL) {
        term.say(&format!(
            "The painful truth costs you {} health but grants you the {}.",
            RED_DAMAGE, TRUTH_SCROLL
        ))?;
    }
    show_player_info(term, player)?;

    term.say("You see the great evil Melon Usk.")?;
    term.say("He, it, whatever stares at you and you go insane.")?;
    term.say("Do you flee for your life or eat your head?")?;
    let answer = term.ask("> ")?;
    if answer.trim().to_lowercase().contains("flee") {
        term.say("You run back the way you came.\n")?;
        Ok(RoomResult::Flee)
    } else {
        Ok(RoomResult::Done(Progress::died(
            "You died. Well, that was tasty!",
        )))
    }
}

pub fn blue_room<T: Terminal>(
    term: &mut T,
    player: &mut PlayerState,
) -> Result<RoomResult, GameError> {
    term.banner(Banner::Chest)?;
    term.say("\nYou have entered the Blue Room.")?;
    player.visit(Location::BlueRoom);
    player.adjust_health(BLUE_HEALING);
    if player.grant(CRYSTAL_MIRROR) {
        term.say(&format!(
            "The blissful ignorance restores {} health and grants you the {}.",
            BLUE_HEALING, CRYSTAL_MIRROR
        ))?;
    }
    show_player_info(term, player)?;

    term.say(
        "You see a room with a wooden treasure chest on the left, \
         and a sleeping guard on the right in front of the door.",
    )?;
    let action = term.ask("\nWhat do you do? > ")?;
    if matches!(
        action.trim().to_lowercase().as_str(),
        "treasure" | "chest" | "left"
    ) {
        treasure_chest(term)?;
    } else {
        term.say("The guard is more interesting, let's go that way!")?;
    }

    let progress = guard::encounter(term)?;
    Ok(RoomResult::Done(progress))
}

/// Flavor only: nothing here touches the player state.
fn treasure_chest<T: Terminal>(term: &mut T) -> Result<(), GameError> {
    term.say("Oh, it's full of treasure!")?;
    term.say("Open it?  Press '1'")?;
    term.say("Leave it alone.  Press '2'")?;
    match term.ask("> ")?.trim() {
        "1" => {
            term.say("Let's see what's in here... /grins")?;
            term.say(
                "The chest creaks open, and the guard is still sleeping. \
                 That's one heavy sleeper!",
            )?;
            term.say(&format!("You find: {}.", TREASURE.join(", ")))?;
            term.say("\nWhat do you want to do?")?;
            term.say(&format!("Take all {} treasure, press '1'", TREASURE.len()))?;
            term.say("Leave it, press '2'")?;
            match term.ask("> ")?.trim() {
                "1" => {
                    term.say(
                        "\tAmazing! Bounty and a shiny new sword. \
                         /drops your old sword in the empty treasure chest.",
                    )?;
                    term.say(&format!("\tYou just received [{}]", TREASURE.join(", ")))?;
                }
                "2" => {
                    term.say("It will still be here (I hope), right after I get past this guard.")?;
                }
                _ => {}
            }
        }
        "2" => {
            term.say("Who needs treasure, let's get out of here.")?;
        }
        _ => {}
    }
    Ok(())
}

pub fn green_room<T: Terminal, R: Rng>(
    term: &mut T,
    player: &mut PlayerState,
    strategy: &Strategy,
    rng: &mut R,
) -> Result<RoomResult, GameError> {
    term.banner(Banner::Magician)?;
    term.say("Welcome to the green magic room.")?;
    term.say("Prepare yourself to play a magic game of Rock, Paper, Scissors.")?;
    term.say("If you win, you will receive a gold coin.")?;
    term.say("If you do not win, you will return to the start of the game.\n")?;
    player.visit(Location::GreenRoom);
    if player.grant(EMERALD_AMULET) {
        term.say(&format!(
            "You found a {} and added it to your inventory!",
            EMERALD_AMULET
        ))?;
    }
    show_player_info(term, player)?;

    let outcome = rps::play_until_decided(term, strategy, rng)?;
    info!("green room: {} ({:?})", outcome.label(), outcome.verdict());
    match outcome {
        RoundOutcome::Played {
            verdict: Verdict::Win,
            ..
        } => {
            let level = player.advance_level();
            term.say(&format!(
                "\nCongratulations! You have advanced to Level {}",
                level
            ))?;
            Ok(RoomResult::Done(Progress::won(
                "The magician gave you a gold coin. Congratulations!",
            )))
        }
        RoundOutcome::Played { .. } => {
            term.say("The magician waves his hand and you are whisked away...\n")?;
            Ok(RoomResult::Flee)
        }
        RoundOutcome::Exit { .. } | RoundOutcome::Invalid { .. } => {
            term.say("The magician frowns. You must try again later.\n")?;
            Ok(RoomResult::Flee)
        }
    }
}

pub fn purple_room<T: Terminal>(
    term: &mut T,
    player: &mut PlayerState,
) -> Result<RoomResult, GameError> {
    term.say("\nYou have entered the Purple Room.")?;
    term.say("The air is calm. The walls glow softly.")?;
    player.visit(Location::PurpleRoom);
    player.adjust_health(PURPLE_HEALING);
    term.say(&format!(
        "You reflect on your journey and regain {} health.",
        PURPLE_HEALING
    ))?;
    show_player_info(term, player)?;

    let choice = term.ask("Do you (rest) or (leave)? > ")?;
    if choice.trim().eq_ignore_ascii_case("rest") {
        term.say("You feel peaceful, but nothing else happens.")?;
    } else {
        term.say("You leave the Purple Room.")?;
    }
    Ok(RoomResult::Done(Progress::Continue))
}
