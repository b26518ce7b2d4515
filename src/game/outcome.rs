//! Control-flow results passed back up through rooms and encounters.

use serde::Serialize;

/// Whether the session goes on, and if not, how it ended.
///
/// `Died` and `Won` carry the narration for the ending. Every component that
/// receives one from a callee returns it unchanged; only the session loop
/// announces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Progress {
    Continue,
    Died(String),
    Won(String),
}

impl Progress {
    pub fn died(reason: impl Into<String>) -> Self {
        Progress::Died(reason.into())
    }

    pub fn won(reason: impl Into<String>) -> Self {
        Progress::Won(reason.into())
    }

    /// True for `Died` and `Won`.
    pub fn is_over(&self) -> bool {
        !matches!(self, Progress::Continue)
    }
}

/// What a room tells the door loop once its decision point is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomResult {
    /// Present the doors again.
    Flee,
    /// Leave the door loop with this progress (`Continue` means the adventure finished normally).
    Done(Progress),
}
