//! # Game Core
//!
//! Everything that happens between "Welcome to the game!" and the farewell.
//!
//! ## Components
//!
//! - [`adventure`] - session driver and the door loop
//! - [`rooms`] - the four scripted rooms behind the doors
//! - [`guard`] - the two-state guard puzzle in the Blue Room
//! - [`rps`] - Rock, Paper, Scissors against the Green Room magician
//! - [`rng`] - uniform and weighted random selection
//! - [`player`] - the player record shared by every component
//! - [`outcome`] - `Progress` and `RoomResult`, the values that carry death and victory upward
//! - [`terminal`] - the prompt/response channel and its stdio implementation
//! - [`art`] - decorative banners
//!
//! ## Control Flow
//!
//! ```text
//! ┌─────────────────┐
//! │  Adventure      │ ← name prompt, door loop, ending, farewell
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Rooms          │ ← entry effects, one decision each
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Guard / RPS    │ ← encounters returning Progress / RoundOutcome
//! └─────────────────┘
//! ```
//!
//! The player state is created once by [`Adventure::play`](adventure::Adventure::play)
//! and lent by `&mut` to each room for the duration of the call.

pub mod adventure;
pub mod art;
pub mod error;
pub mod guard;
pub mod outcome;
pub mod player;
pub mod rng;
pub mod rooms;
pub mod rps;
pub mod terminal;

pub use adventure::{Adventure, SessionSummary};
pub use error::GameError;
pub use outcome::{Progress, RoomResult};
pub use player::{Location, PlayerState};
pub use terminal::{Console, StdConsole, Terminal};
