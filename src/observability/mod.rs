// src/observability/mod.rs
//! Tracing setup
//!
//! Logs go to stderr so stdout carries only the rendered report. The
//! `CISTERN_LOG` environment variable overrides the configured filter,
//! e.g. `CISTERN_LOG=cistern_engine=debug`.

use crate::utils::config::LoggingConfig;
use crate::utils::errors::{EngineError, Result};
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "CISTERN_LOG";

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global subscriber
///
/// Idempotent: only the first successful call installs anything.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    INIT.get_or_try_init(|| install(config)).map(|_| ())
}

/// Resolve the filter from `CISTERN_LOG`, falling back to `fallback`
pub fn resolve_filter(fallback: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .map_err(|e| {
            EngineError::ObservabilityError(format!("invalid log filter '{}': {}", fallback, e))
        })
}

fn install(config: &LoggingConfig) -> Result<()> {
    let filter = resolve_filter(&config.filter)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| EngineError::ObservabilityError(e.to_string()))
}
