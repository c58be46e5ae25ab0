// src/utils/config.rs
//! Layered configuration
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults (the classic 10/12/15 inlet problem) for any key
//!    left unset
//! 2. `cistern.{toml,yaml,json}` in the working directory, or an explicit file
//! 3. `CISTERN_*` environment variables, `__` separating nested keys
//!    (e.g. `CISTERN_REPORT__PRECISION=3`)

use crate::engine::agent::{AgentKind, AgentSpec, RawTime};
use crate::report::ReportFormat;
use crate::utils::errors::{EngineError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Largest number of decimals the report will print
pub const MAX_PRECISION: usize = 12;

/// One pipe as written in configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeConfig {
    /// Display label; defaults to `Pipe A`, `Pipe B`, ...
    #[serde(default)]
    pub label: Option<String>,

    /// Time-units the pipe alone needs; left raw so bad input can be reported
    #[serde(default)]
    pub time: Option<RawTime>,

    pub kind: AgentKind,
}

impl PipeConfig {
    pub fn new(time: i64, kind: AgentKind) -> Self {
        Self {
            label: None,
            time: Some(RawTime::Integer(time)),
            kind,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Report rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,

    /// Decimals used for the completion time
    pub precision: usize,

    /// Singular name of the time unit ("hour", "minute", ...); the report
    /// adds the plural "s" itself, so plural names are rejected
    pub time_unit: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            precision: 2,
            time_unit: "hour".to_string(),
        }
    }
}

/// Logging options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `CISTERN_LOG` is unset
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub pipes: Vec<PipeConfig>,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pipes: vec![
                PipeConfig::new(10, AgentKind::Inlet),
                PipeConfig::new(12, AgentKind::Inlet),
                PipeConfig::new(15, AgentKind::Inlet),
            ],
            report: ReportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load from defaults, an optional `cistern.*` file and the environment
    pub fn load() -> Result<Self> {
        Self::build(File::with_name("cistern").required(false))
    }

    /// Load with an explicit configuration file in place of `cistern.*`
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EngineError::ConfigError(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        // Missing keys fall back to `Default` through `#[serde(default)]`
        let config: EngineConfig = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("CISTERN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        debug!("Loaded configuration with {} pipes", config.pipes.len());

        Ok(config)
    }

    /// Check values the engine and report cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.pipes.is_empty() {
            return Err(EngineError::ConfigError(
                "at least one pipe must be configured".to_string(),
            ));
        }
        if self.report.precision > MAX_PRECISION {
            return Err(EngineError::ConfigError(format!(
                "report precision cannot exceed {}, got {}",
                MAX_PRECISION, self.report.precision
            )));
        }
        let unit = self.report.time_unit.trim();
        if unit.is_empty() {
            return Err(EngineError::ConfigError(
                "report time unit cannot be empty".to_string(),
            ));
        }
        if unit.to_ascii_lowercase().ends_with('s') {
            return Err(EngineError::ConfigError(format!(
                "report time unit must be singular (e.g. \"hour\"), got \"{}\"",
                unit
            )));
        }
        Ok(())
    }

    /// Convert the configured pipes into engine input
    pub fn agents(&self) -> Result<Vec<AgentSpec>> {
        self.pipes
            .iter()
            .enumerate()
            .map(|(index, pipe)| {
                AgentSpec::from_raw(pipe.time, pipe.kind).map_err(|err| match err {
                    EngineError::InvalidInput { reason, .. } => {
                        EngineError::invalid_agent(index, reason)
                    }
                    other => other,
                })
            })
            .collect()
    }

    /// Labels for each pipe, falling back to `Pipe A`, `Pipe B`, ...
    pub fn labels(&self) -> Vec<String> {
        self.pipes
            .iter()
            .enumerate()
            .map(|(index, pipe)| {
                pipe.label
                    .clone()
                    .unwrap_or_else(|| crate::report::default_label(index))
            })
            .collect()
    }
}
