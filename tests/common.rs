//! Test utilities & fixtures.
//! Scripted terminals that feed canned answers and capture the narration.

use std::io::Cursor;

use colordoors::config::{GameConfig, OpponentKind};
use colordoors::game::Console;

pub type Scripted = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// A console that answers each prompt with the next line of `answers`.
/// Banners are switched off so transcripts stay readable in assertion messages.
pub fn scripted(answers: &[&str]) -> Scripted {
    let mut input = answers.join("\n");
    input.push('\n');
    Console::new(Cursor::new(input.into_bytes()), Vec::new()).with_art(false)
}

/// Everything the game printed, prompts included.
pub fn transcript(console: Scripted) -> String {
    String::from_utf8(console.into_output()).expect("narration is utf-8")
}

/// Game settings with a fixed seed and the given opponent.
#[allow(dead_code)] // not every test binary needs a config
pub fn game_config(opponent: OpponentKind) -> GameConfig {
    GameConfig {
        show_art: false,
        seed: Some(7),
        opponent,
        ..GameConfig::default()
    }
}

#[allow(dead_code)]
pub const DOOR_PROMPT: &str = "Do you pick the red door, blue door, or green door?";
