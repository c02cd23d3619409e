//! Result type alias for stepmatch operations.

use super::game_error::GameError;

/// Type alias for Results using GameError.
///
/// # Example
///
/// ```ignore
/// use stepmatch::error::GameResult;
///
/// fn dispatch(&mut self, input: InputEvent) -> GameResult<Vec<EngineEvent>> {
///     // Board mutations propagate invariant violations with `?`
///     Ok(events)
/// }
/// ```
pub type GameResult<T> = Result<T, GameError>;
