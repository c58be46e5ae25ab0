// src/engine/agent.rs
//! Agents (pipes) fed into the rate engine

use crate::utils::errors::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction an agent works in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// Adds work (fills the tank)
    Inlet,

    /// Removes completed work (empties the tank)
    Outlet,
}

impl AgentKind {
    /// Sign applied to the agent's base rate
    pub fn sign(&self) -> i64 {
        match self {
            AgentKind::Inlet => 1,
            AgentKind::Outlet => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Inlet => "Inlet",
            AgentKind::Outlet => "Outlet",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inlet" | "in" => Ok(AgentKind::Inlet),
            "outlet" | "out" => Ok(AgentKind::Outlet),
            other => Err(EngineError::invalid(format!(
                "unknown agent kind '{}', expected inlet or outlet",
                other
            ))),
        }
    }
}

/// Largest magnitude below which every whole `f64` is an exact integer
pub const MAX_EXACT_DECIMAL: f64 = 9_007_199_254_740_992.0;

/// Time as read from a loosely typed source, before validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTime {
    Integer(i64),
    Decimal(f64),
}

impl From<i64> for RawTime {
    fn from(time: i64) -> Self {
        RawTime::Integer(time)
    }
}

impl From<f64> for RawTime {
    fn from(time: f64) -> Self {
        RawTime::Decimal(time)
    }
}

fn exact_integer(time: f64) -> Result<i64> {
    if !time.is_finite() {
        return Err(EngineError::invalid(format!(
            "time must be a finite number, got {}",
            time
        )));
    }
    if time.fract() != 0.0 {
        return Err(EngineError::invalid(format!(
            "time must be a whole number, got {}",
            time
        )));
    }
    if time.abs() > MAX_EXACT_DECIMAL {
        return Err(EngineError::invalid(format!(
            "time {} is too large to be exact as a decimal; write it as an integer",
            time
        )));
    }
    Ok(time as i64)
}

/// A single pipe: how long it alone needs for one full task, and its direction
///
/// `time` is signed so that zero or negative input from a caller can be
/// represented and rejected by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentSpec {
    /// Time-units needed to complete one task alone
    pub time: i64,

    pub kind: AgentKind,
}

impl AgentSpec {
    pub fn new(time: i64, kind: AgentKind) -> Self {
        Self { time, kind }
    }

    pub fn inlet(time: i64) -> Self {
        Self::new(time, AgentKind::Inlet)
    }

    pub fn outlet(time: i64) -> Self {
        Self::new(time, AgentKind::Outlet)
    }

    /// Build an agent from unvalidated numeric input
    ///
    /// Integers are kept exact. Decimals must be finite, whole and within
    /// the range `f64` represents exactly (`|time| <= 2^53`); anything else,
    /// including a missing value, is rejected. Zero and negative integers
    /// pass through and are rejected by the engine.
    pub fn from_raw(time: Option<RawTime>, kind: AgentKind) -> Result<Self> {
        let time = match time.ok_or_else(|| EngineError::invalid("time is missing"))? {
            RawTime::Integer(time) => time,
            RawTime::Decimal(time) => exact_integer(time)?,
        };

        Ok(Self::new(time, kind))
    }

    /// Time as a positive integer, or why it is not one
    pub fn positive_time(&self) -> std::result::Result<u64, String> {
        if self.time > 0 {
            Ok(self.time as u64)
        } else {
            Err(format!("time must be a positive integer, got {}", self.time))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_sign() {
        assert_eq!(AgentKind::Inlet.sign(), 1);
        assert_eq!(AgentKind::Outlet.sign(), -1);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("Inlet".parse::<AgentKind>().unwrap(), AgentKind::Inlet);
        assert_eq!(" OUTLET ".parse::<AgentKind>().unwrap(), AgentKind::Outlet);
        assert_eq!("out".parse::<AgentKind>().unwrap(), AgentKind::Outlet);
        assert!("drain".parse::<AgentKind>().is_err());
    }

    #[test]
    fn test_from_raw_accepts_whole_numbers() {
        let agent = AgentSpec::from_raw(Some(RawTime::Decimal(12.0)), AgentKind::Outlet).unwrap();
        assert_eq!(agent, AgentSpec::outlet(12));
    }

    #[test]
    fn test_from_raw_keeps_large_integers_exact() {
        let agent = AgentSpec::from_raw(Some(RawTime::Integer(9_007_199_254_740_993)), AgentKind::Inlet).unwrap();
        assert_eq!(agent.time, 9_007_199_254_740_993);
    }

    #[test]
    fn test_from_raw_rejects_bad_numbers() {
        assert!(AgentSpec::from_raw(None, AgentKind::Inlet).is_err());
        assert!(AgentSpec::from_raw(Some(2.5.into()), AgentKind::Inlet).is_err());
        assert!(AgentSpec::from_raw(Some(f64::NAN.into()), AgentKind::Inlet).is_err());
        assert!(AgentSpec::from_raw(Some(f64::INFINITY.into()), AgentKind::Inlet).is_err());
        assert!(AgentSpec::from_raw(Some(1e30.into()), AgentKind::Inlet).is_err());
    }

    #[test]
    fn test_from_raw_rejects_inexact_decimals() {
        assert!(AgentSpec::from_raw(Some(MAX_EXACT_DECIMAL.into()), AgentKind::Inlet).is_ok());

        let err = AgentSpec::from_raw(Some(RawTime::Decimal(MAX_EXACT_DECIMAL * 2.0)), AgentKind::Inlet)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_from_raw_keeps_non_positive_for_engine() {
        // Non-positive integers are the engine's call to reject
        let agent = AgentSpec::from_raw(Some(RawTime::Integer(-3)), AgentKind::Inlet).unwrap();
        assert_eq!(agent.time, -3);
        assert!(agent.positive_time().is_err());
    }

    #[test]
    fn test_raw_time_deserializes_both_forms() {
        assert_eq!(serde_json::from_str::<RawTime>("10").unwrap(), RawTime::Integer(10));
        assert_eq!(serde_json::from_str::<RawTime>("7.5").unwrap(), RawTime::Decimal(7.5));
    }

    #[test]
    fn test_serde_kind_names() {
        let json = serde_json::to_string(&AgentSpec::inlet(10)).unwrap();
        assert_eq!(json, r#"{"time":10,"kind":"inlet"}"#);
    }
}
