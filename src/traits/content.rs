//! Content source trait abstraction.
//!
//! Loading content is the only asynchronous boundary of the game: the
//! document is fetched once, validated, and only then is the engine built.

use async_trait::async_trait;

use crate::error::ContentError;

/// Trait for fetching the raw puzzle document.
///
/// Implementations return the document text; parsing and validation happen
/// in [`load_content`](crate::content::load_content) so every source is held
/// to the same contract.
///
/// # Example
///
/// ```ignore
/// use stepmatch::adapters::FileContentSource;
/// use stepmatch::content::load_content;
///
/// let source = FileContentSource::new("steps.json");
/// let model = load_content(&source).await?;
/// ```
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the raw document text.
    async fn fetch(&self) -> Result<String, ContentError>;

    /// Human-readable origin used in logs (a path, "memory", ...).
    fn describe(&self) -> String;
}
