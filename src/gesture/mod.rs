//! Pointer gesture support.
//!
//! - [`position`]: screen cells, regions and grab offsets
//! - [`hit_area`]: per-frame registry of where cards and slots are drawn
//! - [`drag`]: the drag state machine with proxy tracking and hover
//!   highlighting
//!
//! # Usage
//!
//! ```ignore
//! use stepmatch::gesture::{DragGestureController, ScreenPosition};
//!
//! let mut drag = DragGestureController::new();
//!
//! // Pointer down on a card
//! drag.start(card, ScreenPosition::new(40, 10), origin, &board)?;
//!
//! // Pointer moves: proxy follows, slot under pointer is highlighted
//! drag.move_to(ScreenPosition::new(12, 3), &board, &hits);
//!
//! // Pointer up: hand the release to the placement validator
//! if let Some(release) = drag.end(ScreenPosition::new(12, 3), &board, &hits) {
//!     // release.target is the highlighted slot, or None
//! }
//! ```

pub mod drag;
pub mod hit_area;
pub mod position;

pub use drag::{DragGestureController, DragRefusal, DragRelease, GestureState, HoverChange};
pub use hit_area::{HitArea, HitAreaRegistry, HitTarget, HitTester};
pub use position::{GrabOffset, Region, ScreenPosition};
