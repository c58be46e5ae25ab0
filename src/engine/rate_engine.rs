// src/engine/rate_engine.rs
//! End-to-end evaluation of a set of pipes
//!
//! `RateEngine` is stateless: every call works only on its arguments, so a
//! single instance can be shared freely across threads.

use crate::engine::agent::{AgentKind, AgentSpec};
use crate::engine::capacity;
use crate::engine::efficiency;
use crate::engine::result::{CompletionTime, Outcome, RateResult};
use crate::utils::errors::{EngineError, Result};
use tracing::debug;

/// Rate engine for pipe and cistern problems
#[derive(Debug, Clone, Copy, Default)]
pub struct RateEngine;

impl RateEngine {
    pub fn new() -> Self {
        Self
    }

    /// LCM of all times
    pub fn compute_capacity(&self, times: &[u64]) -> Result<u64> {
        capacity::compute_capacity(times)
    }

    /// Signed efficiency of one agent for a given capacity
    pub fn compute_efficiency(&self, capacity: u64, time: u64, kind: AgentKind) -> i64 {
        efficiency::compute_efficiency(capacity, time, kind)
    }

    /// Evaluate all agents running concurrently
    ///
    /// Accepts any non-empty slice; `&[AgentSpec; 3]` coerces directly.
    pub fn evaluate(&self, agents: &[AgentSpec]) -> Result<RateResult> {
        let times = validate(agents)?;

        let capacity = self.compute_capacity(&times)?;

        let efficiencies = agents
            .iter()
            .zip(&times)
            .map(|(agent, &time)| efficiency::try_compute_efficiency(capacity, time, agent.kind))
            .collect::<Result<Vec<_>>>()?;

        let combined_efficiency = efficiency::combine(&efficiencies)?;
        let outcome = Outcome::from_combined(combined_efficiency);

        let completion_time = match outcome {
            Outcome::Stalled => None,
            Outcome::Filling | Outcome::Emptying => {
                CompletionTime::new(capacity, combined_efficiency.unsigned_abs())
            }
        };

        debug!(
            capacity,
            combined_efficiency,
            outcome = %outcome,
            "Evaluated {} agents: efficiencies {:?}",
            agents.len(),
            efficiencies
        );

        Ok(RateResult {
            capacity,
            efficiencies,
            combined_efficiency,
            outcome,
            completion_time,
        })
    }
}

/// Evaluate with a default engine
pub fn evaluate(agents: &[AgentSpec]) -> Result<RateResult> {
    RateEngine::new().evaluate(agents)
}

/// Check every agent has a positive time and return the times
fn validate(agents: &[AgentSpec]) -> Result<Vec<u64>> {
    if agents.is_empty() {
        return Err(EngineError::invalid("at least one agent is required"));
    }

    agents
        .iter()
        .enumerate()
        .map(|(index, agent)| {
            agent.positive_time().map_err(|reason| {
                debug!("Rejecting agent {}: {}", index, reason);
                EngineError::invalid_agent(index, reason)
            })
        })
        .collect()
}
