//! Error category classification.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The puzzle document could not be loaded or failed validation.
    /// Reported once; the user must fix the file and relaunch.
    Content,

    /// A board invariant was about to be violated.
    /// Indicates a programming error in input routing.
    Client,

    /// Terminal or OS level failure.
    System,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Content => "content",
            ErrorCategory::Client => "client",
            ErrorCategory::System => "system",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Content => "Game data problem",
            ErrorCategory::Client => "Application error",
            ErrorCategory::System => "System error",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
