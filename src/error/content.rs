//! Errors raised while loading and validating puzzle content.

use thiserror::Error;

/// The single message shown to the user when content cannot be used.
pub const LOAD_FAILURE_MESSAGE: &str = "Could not load the game data. Check the content file.";

/// Failure to produce a [`ContentModel`](crate::content::ContentModel).
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content source could not be read at all.
    #[error("failed to read content from {origin}: {source}")]
    Load {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not JSON.
    #[error("content is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The document is JSON but does not describe a playable puzzle.
    #[error("invalid content: {0}")]
    Invalid(#[from] InvalidContent),
}

impl ContentError {
    /// Get the message presented to the user. Every variant maps to the same
    /// text; the detail goes to the log.
    pub fn user_message(&self) -> String {
        LOAD_FAILURE_MESSAGE.to_string()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::Load { .. } => "CONTENT_LOAD",
            ContentError::Malformed(_) => "CONTENT_MALFORMED",
            ContentError::Invalid(_) => "CONTENT_INVALID",
        }
    }
}

/// Why a parsed document was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidContent {
    #[error("the document is not an object")]
    NotAnObject,

    #[error("`steps` is missing or is not a list")]
    NotAList,

    #[error("the step list is empty")]
    Empty,

    #[error("step {index} is not an object")]
    StepNotAnObject { index: usize },

    #[error("step {index} is missing its {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("step name `{0}` appears more than once")]
    DuplicateName(String),
}
