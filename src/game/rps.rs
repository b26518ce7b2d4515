//! Rock, Paper, Scissors against the Green Room magician.
//!
//! - [`resolve`] is the pure win/lose/tie table.
//! - [`Strategy`] decides the magician's move (rigged either way, uniform, or weighted).
//! - [`play_round`] runs one prompted round and reports a [`RoundOutcome`].
//! - [`play_until_decided`] repeats rounds while they tie.

use std::fmt;

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::rng::{choose, choose_weighted, validate_weights};
use super::terminal::Terminal;

/// Answers that decline to play, compared after trimming and lowercasing.
const EXIT_PHRASES: [&str; 2] = ["no thanks", "done"];

const ROUND_PROMPT: &str =
    "Choose rock, paper, or scissors by entering the word (or type 'no thanks' or 'done' to exit): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one.
    pub fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Case-insensitive parse of a typed answer, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Move> {
        let word = input.trim();
        Move::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(word))
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one throw from the first mover's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Win,
    Lose,
    Tie,
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Win => "You win!",
            Verdict::Lose => "You lose!",
            Verdict::Tie => "It's a tie!",
        }
    }
}

/// Rock beats Scissors beats Paper beats Rock.
pub fn resolve(player: Move, opponent: Move) -> Verdict {
    if player == opponent {
        Verdict::Tie
    } else if player.beats() == opponent {
        Verdict::Win
    } else {
        Verdict::Lose
    }
}

/// How the opponent picks its move.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// Throw whatever the player's move beats.
    AlwaysLose,
    /// Throw whatever beats the player's move.
    AlwaysWin,
    /// Each move equally likely.
    Uniform,
    /// Rock, Paper, Scissors with these probabilities.
    Weighted([f64; 3]),
}

impl Strategy {
    /// Build a weighted strategy, falling back to a rigged one when the weights are unusable.
    ///
    /// A non-empty but malformed list lets the player win every round; an
    /// empty list lets the opponent win every round.
    pub fn weighted(weights: &[f64]) -> Strategy {
        match validate_weights(weights, Move::ALL.len()) {
            Ok(()) => Strategy::Weighted([weights[0], weights[1], weights[2]]),
            Err(e) => {
                let fallback = if weights.is_empty() {
                    Strategy::AlwaysWin
                } else {
                    Strategy::AlwaysLose
                };
                warn!(
                    "opponent weights {:?} unusable ({}); falling back to {:?}",
                    weights, e, fallback
                );
                fallback
            }
        }
    }

    /// The opponent's move against `player`.
    pub fn pick<R: Rng>(&self, player: Move, rng: &mut R) -> Move {
        match self {
            Strategy::AlwaysLose => player.beats(),
            Strategy::AlwaysWin => player.beaten_by(),
            Strategy::Uniform => *choose(rng, &Move::ALL),
            Strategy::Weighted(weights) => match choose_weighted(rng, &Move::ALL, weights) {
                Ok(m) => *m,
                Err(e) => {
                    warn!("weighted draw failed ({}); opponent concedes", e);
                    player.beats()
                }
            },
        }
    }
}

/// What happened when the player was asked for a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Played {
        player: Move,
        opponent: Move,
        verdict: Verdict,
    },
    /// The player typed one of the exit phrases.
    Exit { input: String },
    /// The player typed something that is not a move.
    Invalid { input: String },
}

impl RoundOutcome {
    /// Short label describing the kind of answer.
    pub fn label(&self) -> &'static str {
        match self {
            RoundOutcome::Played { .. } => "You typed",
            RoundOutcome::Exit { .. } => "You chose not to play",
            RoundOutcome::Invalid { .. } => "Invalid choice",
        }
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            RoundOutcome::Played { verdict, .. } => Some(*verdict),
            _ => None,
        }
    }

    pub fn is_tie(&self) -> bool {
        self.verdict() == Some(Verdict::Tie)
    }
}

/// Prompt for a move and play one round.
///
/// Exit phrases and unknown words return immediately without drawing an
/// opponent move. A played round prints the opponent's move and the verdict.
pub fn play_round<T: Terminal, R: Rng>(
    term: &mut T,
    strategy: &Strategy,
    rng: &mut R,
) -> Result<RoundOutcome, GameError> {
    term.say("Let's play Rock, Paper, Scissors!")?;
    let raw = term.ask(ROUND_PROMPT)?;
    let answer = raw.trim().to_lowercase();

    if EXIT_PHRASES.contains(&answer.as_str()) {
        term.say("Maybe next time! Exiting the game.")?;
        return Ok(RoundOutcome::Exit {
            input: raw.trim().to_string(),
        });
    }

    let Some(player) = Move::parse(&answer) else {
        term.say("Invalid choice. Please enter Rock, Paper, or Scissors.")?;
        return Ok(RoundOutcome::Invalid {
            input: raw.trim().to_string(),
        });
    };

    let opponent = strategy.pick(player, rng);
    let verdict = resolve(player, opponent);
    debug!("rps: {} vs {} -> {:?}", player, opponent, verdict);
    term.say(&format!("{}. {}", opponent, verdict.message()))?;

    Ok(RoundOutcome::Played {
        player,
        opponent,
        verdict,
    })
}

/// Play rounds until one does not end in a tie, and return that round.
pub fn play_until_decided<T: Terminal, R: Rng>(
    term: &mut T,
    strategy: &Strategy,
    rng: &mut R,
) -> Result<RoundOutcome, GameError> {
    loop {
        let outcome = play_round(term, strategy, rng)?;
        if !outcome.is_tie() {
            return Ok(outcome);
        }
        term.say("You tied and can play Rock, Paper, Scissors again.\n")?;
    }
}
