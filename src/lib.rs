//! stepmatch - pair each step of a process with its description.
//!
//! The library holds the interaction and session engine; the `stepmatch`
//! binary is a terminal host for it. Modules are public for use in
//! integration tests.

pub mod adapters;
pub mod app;
pub mod board;
pub mod cli;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod events;
pub mod feedback;
pub mod gesture;
pub mod logging;
pub mod placement;
pub mod selection;
pub mod session;
pub mod terminal;
pub mod traits;
pub mod ui;
