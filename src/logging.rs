//! Log file setup.
//!
//! The terminal belongs to the game, so logs only ever go to a file. Without
//! a configured file no subscriber is installed and every `tracing` call is a
//! no-op. `RUST_LOG` overrides the default filter.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const DEFAULT_FILTER: &str = "stepmatch=info";

/// Install a subscriber appending to `log_file`.
///
/// Returns `Ok(false)` when a global subscriber was already set.
pub fn init_logging(log_file: &Path) -> io::Result<bool> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(path = %log_file.display(), "Logging started");
    }
    Ok(installed)
}
