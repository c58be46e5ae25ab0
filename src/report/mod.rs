// src/report/mod.rs
//! Rendering of evaluation results
//!
//! - **Narrative**: outcome message, severity and completion line
//! - **Reporter**: text, JSON and YAML renditions of a full result
//!
//! The engine never formats anything itself; this module is the only place
//! that decides labels, wording and rounding.

pub mod narrative;
pub mod reporter;

// Re-export commonly used types
pub use narrative::{direction_label, Narrative, Severity};
pub use reporter::{PipeEntry, ReportDocument, Reporter};

use crate::utils::errors::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Human-readable text
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,

    /// YAML document
    Yaml,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

impl FromStr for ReportFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            other => Err(EngineError::ConfigError(format!(
                "unknown report format: {}",
                other
            ))),
        }
    }
}

/// `Pipe A` .. `Pipe Z`, then `Pipe 27`, `Pipe 28`, ...
pub fn default_label(index: usize) -> String {
    if index < 26 {
        format!("Pipe {}", (b'A' + index as u8) as char)
    } else {
        format!("Pipe {}", index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        assert_eq!(default_label(0), "Pipe A");
        assert_eq!(default_label(2), "Pipe C");
        assert_eq!(default_label(25), "Pipe Z");
        assert_eq!(default_label(26), "Pipe 27");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("yml".parse::<ReportFormat>().unwrap(), ReportFormat::Yaml);
        assert!("xml".parse::<ReportFormat>().is_err());
    }
}
