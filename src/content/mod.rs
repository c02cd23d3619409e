//! Immutable puzzle content.
//!
//! A [`ContentModel`] is the ordered list of [`Step`]s a session is built
//! from. It is validated once at construction and then only read: the board
//! builds its cards and slots from it, and a session reset rebuilds from the
//! same model.
//!
//! Documents arrive as JSON (see [`document`]) through a
//! [`ContentSource`](crate::traits::ContentSource).

pub mod document;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::InvalidContent;

pub use document::{load_content, parse_document};

/// Title used when a document does not provide one.
pub const DEFAULT_TITLE: &str = "Game";

/// One stage of the modeled process.
///
/// `name` is the matching key: a card fits a slot exactly when their names
/// are equal (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub description: String,
}

impl Step {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Validated, read-only puzzle content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentModel {
    title: String,
    steps: Vec<Step>,
}

impl ContentModel {
    /// Validate `steps` and wrap them.
    ///
    /// Fails if the list is empty, if a step has a blank name or
    /// description, or if two steps share a name.
    pub fn new(title: Option<String>, steps: Vec<Step>) -> Result<Self, InvalidContent> {
        if steps.is_empty() {
            return Err(InvalidContent::Empty);
        }

        let mut seen = HashSet::with_capacity(steps.len());
        for (index, step) in steps.iter().enumerate() {
            if step.name.trim().is_empty() {
                return Err(InvalidContent::MissingField {
                    index,
                    field: "name",
                });
            }
            if step.description.trim().is_empty() {
                return Err(InvalidContent::MissingField {
                    index,
                    field: "description",
                });
            }
            if !seen.insert(step.name.as_str()) {
                return Err(InvalidContent::DuplicateName(step.name.clone()));
            }
        }

        let title = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Ok(Self { title, steps })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Steps in authored order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a constructed model; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, name: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.name == name)
    }
}
