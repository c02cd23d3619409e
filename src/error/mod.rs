//! Unified error handling for stepmatch.
//!
//! Three classes of failure exist:
//!
//! | Category | Source | Handling |
//! |----------|--------|----------|
//! | Content | Missing, unreadable or invalid puzzle document | Fatal, shown once, no retry |
//! | Client | Board invariant violated (routing bug) | Fatal assertion, never user-facing |
//! | System | Terminal I/O | Fatal |
//!
//! A rejected placement is *not* an error: it is an [`Outcome`](crate::placement::Outcome)
//! and flows through the normal event path.
//!
//! # Example
//!
//! ```ignore
//! use stepmatch::error::{GameError, GameResult};
//!
//! fn build() -> GameResult<()> {
//!     let model = parse_document(raw)?; // ContentError -> GameError
//!     Ok(())
//! }
//! ```

mod category;
mod content;
mod game_error;
mod invariant;
mod result;

pub use category::ErrorCategory;
pub use content::{ContentError, InvalidContent, LOAD_FAILURE_MESSAGE};
pub use game_error::GameError;
pub use invariant::InvariantViolation;
pub use result::GameResult;
