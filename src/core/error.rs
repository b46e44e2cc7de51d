//! Error type for the game core

use thiserror::Error;

/// Errors raised by the pure game functions and the session API
///
/// None of these are transient: they report a caller mistake and are never
/// retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Bad configuration or out-of-range arguments
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Secret and guess have different lengths
    #[error("length mismatch: expected {expected} colors, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A guess was submitted before all of its slots were filled
    #[error("incomplete guess: {filled} of {length} slots filled")]
    IncompleteGuess { filled: usize, length: usize },

    /// A guess was submitted after the game ended
    #[error("game is over, start a new game to keep playing")]
    GameOver,

    /// A guess used a color outside the session palette
    #[error("unknown color '{0}'")]
    UnknownColor(String),
}

impl GameError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result alias used throughout the game core
pub type Result<T> = std::result::Result<T, GameError>;
