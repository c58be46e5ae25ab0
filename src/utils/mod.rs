// src/utils/mod.rs
//! Common utilities shared by the engine and its front end
//!
//! - **Errors**: the crate-wide `EngineError` taxonomy and `Result` alias
//! - **Config**: layered configuration (defaults, file, environment)

pub mod config;
pub mod errors;

// Re-export commonly used types
pub use config::{EngineConfig, LoggingConfig, PipeConfig, ReportConfig};
pub use errors::{EngineError, Result};
