//! Tracing Setup
//!
//! Installs a console `tracing` subscriber writing to stderr, so stdout stays
//! free for quote output.
//!
//! # Configuration
//!
//! - `RUST_LOG`: Filter directives; overrides `observability.logging.level`
//! - `observability.logging.format`: `full` or `compact`
//!
//! # Usage
//!
//! ```rust,ignore
//! use pricing_engine::telemetry::init_logging;
//!
//! fn main() {
//!     let config = pricing_engine::config::Config::default();
//!     init_logging(&config.observability.logging);
//! }
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the level filter: `RUST_LOG` if set and valid, else the configured level.
#[must_use]
pub fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(&config.level).unwrap_or_else(|e| {
            eprintln!(
                "Invalid log level '{}': {e}, falling back to info",
                config.level
            );
            EnvFilter::new("info")
        })
    })
}

/// Initialize console logging.
///
/// Returns `false` if a global subscriber was already installed (for example
/// by a test harness); the existing subscriber is kept.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config))
        .with_target(config.with_target)
        .with_writer(std::io::stderr);

    let installed = if config.format == "compact" {
        builder.compact().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(
            level = %config.level,
            format = %config.format,
            "Logging initialized"
        );
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config);
        // A second install must not panic and must report the existing subscriber
        assert!(!init_logging(&config));
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let config = LoggingConfig {
            level: "=[not a directive".to_string(),
            ..LoggingConfig::default()
        };
        // Must not panic regardless of RUST_LOG
        let _filter = build_env_filter(&config);
    }
}
