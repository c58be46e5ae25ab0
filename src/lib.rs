// src/lib.rs
//! Cistern Engine Library
//!
//! Exact arithmetic for classic pipe and cistern problems: given pipes that
//! each fill or empty a tank in a known time, find a common tank capacity,
//! each pipe's signed efficiency, their combined efficiency and how long the
//! tank takes to fill or empty with every pipe open.
//!
//! # Architecture
//!
//! - **engine**: capacity (LCM), efficiencies, outcome and completion time
//! - **report**: text/JSON/YAML rendering of results and rejections
//! - **observability**: tracing subscriber setup
//! - **utils**: error types and layered configuration
//!
//! # Example
//!
//! ```
//! use cistern_engine::{AgentSpec, Outcome, RateEngine};
//!
//! let result = RateEngine::new()
//!     .evaluate(&[AgentSpec::inlet(10), AgentSpec::outlet(12), AgentSpec::inlet(15)])
//!     .unwrap();
//!
//! assert_eq!(result.capacity, 60);
//! assert_eq!(result.efficiencies, vec![6, -5, 4]);
//! assert_eq!(result.outcome, Outcome::Filling);
//! assert_eq!(result.completion_time.unwrap().to_string(), "12.00");
//! ```

// Public module exports
pub mod engine;
pub mod observability;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use engine::{evaluate, AgentKind, AgentSpec, CompletionTime, Outcome, RateEngine, RateResult};
pub use report::{ReportFormat, Reporter};
pub use utils::config::EngineConfig;
pub use utils::errors::{EngineError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_HASH: &str = env!("GIT_HASH");

/// Engine build information
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_timestamp: &'static str,
    pub rustc_version: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            git_hash: GIT_HASH,
            build_timestamp: env!("BUILD_TIMESTAMP"),
            rustc_version: env!("RUSTC_VERSION"),
        }
    }
}
