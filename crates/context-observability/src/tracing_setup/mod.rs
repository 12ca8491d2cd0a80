//! Tracing setup: structured JSON logging with span definitions and event types.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

use context_core::config::ObservabilityConfig;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "QCONTEXT_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects `QCONTEXT_LOG` for filtering, defaulting to `info`. Safe to
/// call more than once: later calls leave the first subscriber in place.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter))
}

/// `QCONTEXT_LOG` if set, otherwise the configured `observability.log_level`.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    install(filter)
}

/// Returns false if a global subscriber was already set.
fn install(filter: EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}
