//! In-memory content source for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::ContentError;
use crate::traits::ContentSource;

/// Serves a fixed document, or a fixed I/O failure.
///
/// # Example
///
/// ```ignore
/// use stepmatch::adapters::mock::InMemoryContent;
///
/// let source = InMemoryContent::new(r#"{"steps":[{"name":"A","description":"a"}]}"#);
/// let model = load_content(&source).await?;
/// assert_eq!(source.fetch_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryContent {
    document: Option<String>,
    failure: Option<String>,
    fetches: Arc<Mutex<usize>>,
}

impl InMemoryContent {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            failure: None,
            fetches: Arc::new(Mutex::new(0)),
        }
    }

    /// A source whose every fetch fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            document: None,
            failure: Some(message.into()),
            fetches: Arc::new(Mutex::new(0)),
        }
    }

    /// How many times `fetch` was called.
    pub fn fetch_count(&self) -> usize {
        *self.fetches.lock().unwrap()
    }
}

#[async_trait]
impl ContentSource for InMemoryContent {
    async fn fetch(&self) -> Result<String, ContentError> {
        *self.fetches.lock().unwrap() += 1;
        match (&self.document, &self.failure) {
            (Some(doc), _) => Ok(doc.clone()),
            (None, failure) => Err(ContentError::Load {
                origin: self.describe(),
                source: std::io::Error::new(
                    std::io::ErrorKind::Other,
                    failure.clone().unwrap_or_default(),
                ),
            }),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
