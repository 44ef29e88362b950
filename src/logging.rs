//! Logging configuration and initialization.
//!
//! The level is decided once from the command line and handed to [`init`];
//! library code only uses the `tracing` macros.

use tracing_subscriber::EnvFilter;

/// Verbosity settings taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogConfig {
    /// Number of `-v` flags.
    pub verbose: u8,
    /// `--debug` was passed.
    pub debug: bool,
}

impl LogConfig {
    /// Filter directive for this verbosity.
    pub fn level(&self) -> &'static str {
        match (self.verbose, self.debug) {
            (v, _) if v >= 3 => "trace",
            (2, _) | (_, true) => "debug",
            (1, false) => "info",
            _ => "warn",
        }
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the command line when set.
pub fn init(config: LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level()));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.verbose >= 2)
        .without_time()
        .try_init();

    tracing::debug!(level = config.level(), "logging initialized");
}
