// src/report/narrative.rs
//! Human-facing description of an outcome

use crate::engine::result::{Outcome, RateResult};
use serde::Serialize;
use std::fmt;

/// How an outcome message should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Tank fills
    Success,

    /// Tank level never changes
    Warning,

    /// Tank empties
    Error,
}

impl Severity {
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Success => "[success]",
            Severity::Warning => "[warning]",
            Severity::Error => "[error]",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Direction shown next to a single pipe's efficiency
pub fn direction_label(efficiency: i64) -> &'static str {
    if efficiency > 0 {
        "Fills"
    } else {
        "Empties"
    }
}

/// Outcome message plus the completion-time line, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub severity: Severity,
    pub message: String,
    pub completion_line: Option<String>,
}

impl Narrative {
    pub fn new(result: &RateResult, precision: usize, time_unit: &str) -> Self {
        let combined = result.combined_efficiency;

        let (severity, verb, title) = match result.outcome {
            Outcome::Stalled => {
                return Self {
                    severity: Severity::Warning,
                    message: "The combined efficiency is 0. The water level in the tank \
                              will not change when all pipes are open."
                        .to_string(),
                    completion_line: None,
                };
            }
            Outcome::Filling => (Severity::Success, "fill", "Fill"),
            Outcome::Emptying => (Severity::Error, "empty", "Empty"),
        };

        let message = format!(
            "Combined efficiency is {} units/{}. The tank will {}.",
            combined, time_unit, verb
        );

        let completion_line = result.completion_time.map(|t| {
            format!(
                "Time to {} the Tank (All Pipes Open): {:.*} {}s",
                title, precision, t, time_unit
            )
        });

        Self {
            severity,
            message,
            completion_line,
        }
    }
}
