//! Logging setup for the binary and integration tests.
//!
//! All diagnostics go to stderr through `tracing`, leaving stdout for the
//! conversation itself. Call [`init_logging`] once near process start;
//! later calls are no-ops.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Configuration passed to [`init_logging`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default filter applied when `RUST_LOG` is unset.
    pub default_filter: &'static str,
    /// Raise the default filter to `debug` for this crate.
    pub verbose: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: "warn",
            verbose: false,
        }
    }
}

impl LogConfig {
    fn resolved_filter(&self) -> String {
        if self.verbose {
            format!("{},nvd_chat=debug", self.default_filter)
        } else {
            self.default_filter.to_string()
        }
    }
}

/// Initialise the global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured default filter.
pub fn init_logging(config: LogConfig) {
    INITIALISED.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.resolved_filter()));

        // A subscriber installed by a test harness wins; ignore the error.
        let _ = fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
