// src/utils/errors.rs
//! Error types for the rate engine
//!
//! The arithmetic core only ever produces `InvalidInput` and
//! `CapacityOverflow`. The remaining variants belong to the surrounding
//! configuration, reporting and observability layers.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors produced by the engine and its collaborators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An agent's time is zero, negative, non-integral or missing, or no
    /// agents were supplied at all
    #[error("invalid input{}: {reason}", agent_suffix(.agent))]
    InvalidInput {
        /// Zero-based index of the offending agent, if one is to blame
        agent: Option<usize>,
        reason: String,
    },

    /// Valid input whose exact capacity or rates exceed 64-bit range
    #[error("capacity overflow: {0}")]
    CapacityOverflow(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("export failed: {0}")]
    ExportFailed(String),

    #[error("observability setup failed: {0}")]
    ObservabilityError(String),
}

fn agent_suffix(agent: &Option<usize>) -> String {
    match agent {
        Some(index) => format!(" for agent {}", index),
        None => String::new(),
    }
}

impl EngineError {
    /// Build an `InvalidInput` error blamed on a specific agent
    pub fn invalid_agent(agent: usize, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            agent: Some(agent),
            reason: reason.into(),
        }
    }

    /// Build an `InvalidInput` error not tied to a single agent
    pub fn invalid(reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            agent: None,
            reason: reason.into(),
        }
    }

    /// True when the caller supplied input the engine refuses to compute
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EngineError::InvalidInput { .. })
    }
}

impl From<config::ConfigError> for EngineError {
    fn from(err: config::ConfigError) -> Self {
        EngineError::ConfigError(err.to_string())
    }
}
