//! # Colordoors - a small text adventure
//!
//! You wake up in a dungeon with three doors in front of you (and a fourth
//! that nobody mentions). Each room applies its own effect to your health and
//! inventory and then asks you for one decision:
//!
//! - **Red Room**: face Melon Usk. Flee, or be eaten.
//! - **Blue Room**: a treasure chest and a sleeping guard who must be outwitted.
//! - **Green Room**: beat the magician at Rock, Paper, Scissors to win the game.
//! - **Purple Room**: a quiet place to heal and finish the adventure.
//!
//! Fleeing sends you back to the doors; death and victory end the session.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use colordoors::config::Config;
//! use colordoors::game::{Adventure, StdConsole};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("colordoors.toml").await?;
//!     let mut console = StdConsole::stdio().with_art(config.game.show_art);
//!     let summary = Adventure::new(&config.game).play(&mut console)?;
//!     println!("Final health: {}", summary.player.health());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - rooms, encounters, the door loop and the terminal abstraction
//! - [`config`] - optional TOML configuration
//! - [`validation`] - player name rules
//! - [`logutil`] - single-line quoting of player input for logs

pub mod config;
pub mod game;
pub mod logutil;
pub mod validation;
