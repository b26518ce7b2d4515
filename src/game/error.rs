use thiserror::Error;

/// Errors that can abort a running session.
///
/// Bad answers at a prompt are not errors; every prompt handles those itself.
/// Only the terminal failing underneath the game ends up here.
#[derive(Debug, Error)]
pub enum GameError {
    /// Wrapper around IO errors while reading input or writing narration.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Input reached end-of-file while a prompt was waiting for an answer.
    #[error("input closed while waiting for an answer")]
    InputClosed,
}
