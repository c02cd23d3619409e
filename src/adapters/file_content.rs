//! File-backed content source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::ContentError;
use crate::traits::ContentSource;

/// Reads the puzzle document from a JSON file.
#[derive(Debug, Clone)]
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn fetch(&self) -> Result<String, ContentError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ContentError::Load {
                origin: self.describe(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
