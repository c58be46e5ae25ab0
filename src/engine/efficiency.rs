// src/engine/efficiency.rs
//! Signed per-agent efficiencies

use crate::engine::agent::AgentKind;
use crate::utils::errors::{EngineError, Result};

/// Units of work per time-unit for one agent
///
/// `capacity` must be a multiple of `time` and `capacity / time` must fit in
/// an `i64`; `RateEngine::evaluate` guarantees both. Inlets are positive,
/// outlets negative.
pub fn compute_efficiency(capacity: u64, time: u64, kind: AgentKind) -> i64 {
    let base = (capacity / time) as i64;
    kind.sign() * base
}

/// Checked form of [`compute_efficiency`]
pub fn try_compute_efficiency(capacity: u64, time: u64, kind: AgentKind) -> Result<i64> {
    if time == 0 {
        return Err(EngineError::invalid("time must be a positive integer, got 0"));
    }
    if capacity % time != 0 {
        return Err(EngineError::invalid(format!(
            "capacity {} is not a multiple of time {}",
            capacity, time
        )));
    }

    let base = i64::try_from(capacity / time).map_err(|_| {
        EngineError::CapacityOverflow(format!(
            "efficiency {} / {} does not fit in a signed 64-bit integer",
            capacity, time
        ))
    })?;

    Ok(kind.sign() * base)
}

/// Checked sum of all efficiencies
pub fn combine(efficiencies: &[i64]) -> Result<i64> {
    efficiencies.iter().try_fold(0i64, |acc, &e| {
        acc.checked_add(e).ok_or_else(|| {
            EngineError::CapacityOverflow(format!(
                "combined efficiency of {:?} overflows",
                efficiencies
            ))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inlet_is_positive() {
        assert_eq!(compute_efficiency(60, 10, AgentKind::Inlet), 6);
    }

    #[test]
    fn test_outlet_is_negative() {
        assert_eq!(compute_efficiency(60, 12, AgentKind::Outlet), -5);
    }

    #[test]
    fn test_checked_matches_unchecked() {
        for (time, kind) in [(10, AgentKind::Inlet), (12, AgentKind::Outlet), (15, AgentKind::Inlet)] {
            assert_eq!(
                try_compute_efficiency(60, time, kind).unwrap(),
                compute_efficiency(60, time, kind)
            );
        }
    }

    #[test]
    fn test_checked_rejects_bad_preconditions() {
        assert!(try_compute_efficiency(60, 0, AgentKind::Inlet).is_err());
        assert!(try_compute_efficiency(60, 7, AgentKind::Inlet).is_err());

        let err = try_compute_efficiency(u64::MAX, 1, AgentKind::Inlet).unwrap_err();
        assert!(matches!(err, EngineError::CapacityOverflow(_)));
    }

    #[test]
    fn test_combine() {
        assert_eq!(combine(&[6, -5, 4]).unwrap(), 5);
        assert_eq!(combine(&[5, -3, -2]).unwrap(), 0);
        assert_eq!(combine(&[]).unwrap(), 0);
        assert!(combine(&[i64::MAX, 1]).is_err());
    }
}
