// src/report/reporter.rs
//! Render a `RateResult` for people (text) or tools (JSON, YAML)

use crate::engine::agent::{AgentKind, AgentSpec};
use crate::engine::result::{Outcome, RateResult};
use crate::report::narrative::{direction_label, Narrative};
use crate::report::{default_label, ReportFormat};
use crate::utils::config::ReportConfig;
use crate::utils::errors::{EngineError, Result};
use serde::Serialize;
use std::fmt::Write;
use tracing::debug;

/// One pipe row of a report
#[derive(Debug, Clone, Serialize)]
pub struct PipeEntry {
    pub label: String,
    pub time: i64,
    pub kind: AgentKind,
    pub efficiency: i64,
    pub direction: &'static str,
}

/// Structured form of a report, shared by every output format
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub capacity: u64,
    pub capacity_note: String,
    pub pipes: Vec<PipeEntry>,
    pub combined_efficiency: i64,
    pub outcome: Outcome,
    /// Completion time rounded to the configured precision
    pub completion_time: Option<f64>,
    /// Completion time as an exact fraction, e.g. `"60/7"`
    pub completion_time_exact: Option<String>,
    pub time_unit: String,
    pub narrative: Narrative,
}

/// Report renderer
#[derive(Debug, Clone)]
pub struct Reporter {
    format: ReportFormat,
    precision: usize,
    time_unit: String,
    labels: Vec<String>,
}

impl Reporter {
    /// Create a reporter with two decimals and "hour" as the time unit
    pub fn new(format: ReportFormat) -> Self {
        Self::from_config(&ReportConfig {
            format,
            ..Default::default()
        })
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            format: config.format,
            precision: config.precision,
            time_unit: config.time_unit.clone(),
            labels: Vec::new(),
        }
    }

    /// Override pipe labels; missing entries fall back to `Pipe A`, ...
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    fn label(&self, index: usize) -> String {
        self.labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| default_label(index))
    }

    /// Build the structured report for `agents` and their evaluation
    pub fn document(&self, agents: &[AgentSpec], result: &RateResult) -> Result<ReportDocument> {
        if agents.len() != result.efficiencies.len() {
            return Err(EngineError::ExportFailed(format!(
                "{} agents but {} efficiencies",
                agents.len(),
                result.efficiencies.len()
            )));
        }

        let times = agents
            .iter()
            .map(|a| a.time.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let pipes = agents
            .iter()
            .zip(&result.efficiencies)
            .enumerate()
            .map(|(index, (agent, &efficiency))| PipeEntry {
                label: self.label(index),
                time: agent.time,
                kind: agent.kind,
                efficiency,
                direction: direction_label(efficiency),
            })
            .collect();

        let scale = 10f64.powi(self.precision as i32);

        Ok(ReportDocument {
            capacity: result.capacity,
            capacity_note: format!(
                "The capacity is the LCM of the input times ({}) to ensure efficiencies are integers.",
                times
            ),
            pipes,
            combined_efficiency: result.combined_efficiency,
            outcome: result.outcome,
            completion_time: result
                .completion_time
                .map(|t| (t.as_f64() * scale).round() / scale),
            completion_time_exact: result.completion_time.map(|t| t.to_exact_string()),
            time_unit: self.time_unit.clone(),
            narrative: Narrative::new(result, self.precision, &self.time_unit),
        })
    }

    /// Render in the configured format
    pub fn render(&self, agents: &[AgentSpec], result: &RateResult) -> Result<String> {
        debug!("Rendering {} pipes as {}", agents.len(), self.format);

        let document = self.document(agents, result)?;

        match self.format {
            ReportFormat::Text => Ok(self.render_text(&document)),
            ReportFormat::Json => serde_json::to_string_pretty(&document).map_err(|e| {
                EngineError::ExportFailed(format!("JSON serialization error: {}", e))
            }),
            ReportFormat::Yaml => serde_yaml::to_string(&document).map_err(|e| {
                EngineError::ExportFailed(format!("YAML serialization error: {}", e))
            }),
        }
    }

    fn render_text(&self, doc: &ReportDocument) -> String {
        let mut out = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(out, "Calculated Results");
        let _ = writeln!(out, "==================");
        let _ = writeln!(out, "Total Tank Capacity (Units): {}", doc.capacity);
        let _ = writeln!(out, "{}", doc.capacity_note);
        let _ = writeln!(out);

        for pipe in &doc.pipes {
            let _ = writeln!(
                out,
                "{} Efficiency (Units/{}): {} ({})",
                pipe.label, self.time_unit, pipe.efficiency, pipe.direction
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Combined Performance");
        let _ = writeln!(out, "--------------------");
        let _ = writeln!(out, "{} {}", doc.narrative.severity, doc.narrative.message);
        if let Some(line) = &doc.narrative.completion_line {
            let _ = writeln!(out, "{}", line);
        }

        out
    }

    /// Message shown instead of a report when the engine refuses the input
    pub fn render_rejection(&self, err: &EngineError) -> String {
        match err {
            EngineError::InvalidInput {
                agent: Some(index),
                reason,
            } => format!(
                "Invalid input for {}: {}. No calculation was performed.",
                self.label(*index),
                reason
            ),
            EngineError::InvalidInput { agent: None, reason } => {
                format!("Invalid input: {}. No calculation was performed.", reason)
            }
            other => format!("Calculation failed: {}", other),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ReportFormat::Text)
    }
}
