//! Tracing setup shared by every binary.
//!
//! Logs go to stderr so that stdout carries only report lines. The filter
//! is read from `CROSSBENCH_LOG`, then `RUST_LOG`, then falls back to
//! [`DEFAULT_DIRECTIVE`].

use std::env;

use tracing_subscriber::EnvFilter;

/// Environment variable with tracing directives for this crate's binaries.
pub const LOG_ENV: &str = "CROSSBENCH_LOG";

/// Directive used when no environment filter resolves.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Resolve the filter from the environment hints.
pub fn resolve_filter() -> EnvFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(resolve_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::debug!("after init");
    }
}
