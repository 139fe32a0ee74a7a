//! Error types for family100.

use thiserror::Error;

/// Result type alias using `GameError`.
pub type Result<T> = std::result::Result<T, GameError>;

/// Recoverable failures surfaced to the player as notifications.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The loader returned data without a usable question or answer list.
    #[error("invalid question payload: {0}")]
    InvalidPayload(String),

    /// Network failure, non-2xx status or an unparseable body.
    #[error("transport error: {0}")]
    Transport(String),

    /// The player submitted a blank answer.
    #[error("empty input")]
    EmptyInput,
}

impl GameError {
    /// Returns a short message suitable for a notification.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidPayload(_) => "The question server sent an unusable question",
            Self::Transport(_) => "Failed to load question",
            Self::EmptyInput => "Type an answer first",
        }
    }
}
