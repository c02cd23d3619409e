//! Discrete (click/keyboard) selection.
//!
//! At most one card is *armed* for placement at a time. Arming a card
//! disarms any other; toggling the armed card disarms it. Dragging a card
//! arms it too, so every input path agrees on which card is being placed.
//!
//! # Usage
//!
//! ```ignore
//! use stepmatch::selection::{SelectionController, SelectionChange};
//!
//! let mut selection = SelectionController::new();
//!
//! // Click on a card
//! assert_eq!(selection.toggle(card, &board), SelectionChange::Made(card));
//!
//! // Click on a slot: route (card, slot) to the validator
//! if let Some(card) = selection.armed() {
//!     // attempt placement
//! }
//! ```

pub mod state;

pub use state::{SelectionChange, SelectionController, SelectionState};
