//! Unified error type for stepmatch.

use thiserror::Error;

use super::category::ErrorCategory;
use super::content::ContentError;
use super::invariant::InvariantViolation;

/// Unified error type.
///
/// Consolidates content, invariant and terminal failures so the binary can
/// report any of them through one path.
#[derive(Debug, Error)]
pub enum GameError {
    /// Puzzle content could not be loaded or validated.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// A board invariant would have been broken.
    #[error("board invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),

    /// Terminal setup, drawing or input failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl GameError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            GameError::Content(_) => ErrorCategory::Content,
            GameError::Invariant(_) => ErrorCategory::Client,
            GameError::Terminal(_) => ErrorCategory::System,
        }
    }

    /// Every error in this crate ends the current run.
    pub fn is_fatal(&self) -> bool {
        true
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            GameError::Content(err) => err.user_message(),
            GameError::Invariant(_) => {
                "An internal error occurred. Please restart the game.".to_string()
            }
            GameError::Terminal(_) => {
                "The terminal stopped responding. Please restart the game.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            GameError::Content(err) => err.error_code(),
            GameError::Invariant(err) => err.error_code(),
            GameError::Terminal(_) => "TERMINAL_IO",
        }
    }
}
