//! Game configuration.
//!
//! Values come from three layers, later layers winning:
//! defaults, then environment variables, then command-line arguments.
//!
//! | Variable | Effect |
//! |---|---|
//! | `STEPMATCH_CONTENT` | Path to the puzzle document |
//! | `STEPMATCH_MUTED` | `1`/`true` starts with sound off |
//! | `STEPMATCH_SEED` | Fixed shuffle seed |
//! | `STEPMATCH_LOG` | Write logs to this file |

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::RunArgs;
use crate::session::DEFAULT_TICK_INTERVAL;

pub const ENV_CONTENT: &str = "STEPMATCH_CONTENT";
pub const ENV_MUTED: &str = "STEPMATCH_MUTED";
pub const ENV_SEED: &str = "STEPMATCH_SEED";
pub const ENV_LOG: &str = "STEPMATCH_LOG";

/// Document name looked up in the working directory.
pub const DEFAULT_CONTENT_FILE: &str = "steps.json";

/// How long the "incorrect" highlight stays on a card.
pub const DEFAULT_PULSE_DURATION: Duration = Duration::from_millis(260);

/// Runtime settings for one game process.
///
/// # Example
///
/// ```ignore
/// use stepmatch::config::GameConfig;
///
/// let config = GameConfig::default()
///     .with_content_path("demos/water_cycle.json")
///     .with_seed(7)
///     .with_muted(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub content_path: PathBuf,
    pub muted: bool,
    /// Fixed shuffle seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Refresh period of the live timer.
    pub tick_interval: Duration,
    pub pulse_duration: Duration,
    /// No log file means logging stays off.
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            content_path: default_content_path(),
            muted: false,
            seed: None,
            tick_interval: DEFAULT_TICK_INTERVAL,
            pulse_duration: DEFAULT_PULSE_DURATION,
            log_file: None,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_path = path.into();
        self
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_pulse_duration(mut self, duration: Duration) -> Self {
        self.pulse_duration = duration;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::default().overlay_env(|key| std::env::var(key).ok())
    }

    /// Apply environment-style overrides read through `lookup`.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn overlay_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_CONTENT).filter(|v| !v.trim().is_empty()) {
            self.content_path = PathBuf::from(path);
        }
        if let Some(value) = lookup(ENV_MUTED) {
            self.muted = parse_flag(&value);
        }
        if let Some(value) = lookup(ENV_SEED) {
            match value.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => tracing::warn!(value = %value, "Ignoring invalid {}", ENV_SEED),
            }
        }
        if let Some(path) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            self.log_file = Some(PathBuf::from(path));
        }
        self
    }

    /// Apply command-line overrides.
    pub fn overlay_args(mut self, args: &RunArgs) -> Self {
        if let Some(path) = &args.content_path {
            self.content_path = path.clone();
        }
        if args.mute {
            self.muted = true;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// `steps.json` in the working directory, or the copy under the user config
/// directory when only that one exists.
pub fn default_content_path() -> PathBuf {
    let local = PathBuf::from(DEFAULT_CONTENT_FILE);
    if local.exists() {
        return local;
    }
    match user_content_path() {
        Some(path) if path.exists() => path,
        _ => local,
    }
}

/// `<config dir>/stepmatch/steps.json`
pub fn user_content_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stepmatch").join(DEFAULT_CONTENT_FILE))
}
