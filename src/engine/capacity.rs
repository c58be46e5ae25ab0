// src/engine/capacity.rs
//! Capacity derivation
//!
//! The capacity is the least common multiple of every agent's time. It is
//! the smallest task size for which every `capacity / time_i` is a whole
//! number, so all efficiencies stay exact integers.

use crate::utils::errors::{EngineError, Result};
use tracing::debug;

/// Greatest common divisor (Euclid). `gcd(a, 0) == a`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple of two positive integers
///
/// Divides before multiplying to keep intermediates small; `None` when the
/// result does not fit in a `u64` or either argument is zero.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return None;
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// LCM of all `times`, folded left: `lcm(lcm(a, b), c)`
pub fn compute_capacity(times: &[u64]) -> Result<u64> {
    if times.is_empty() {
        return Err(EngineError::invalid("at least one agent time is required"));
    }

    let mut capacity = 1u64;
    for (index, &time) in times.iter().enumerate() {
        if time == 0 {
            return Err(EngineError::invalid_agent(
                index,
                "time must be a positive integer, got 0",
            ));
        }
        capacity = lcm(capacity, time).ok_or_else(|| {
            EngineError::CapacityOverflow(format!(
                "lcm of {:?} exceeds {}",
                times,
                u64::MAX
            ))
        })?;
    }

    debug!("Capacity for times {:?} is {}", times, capacity);
    Ok(capacity)
}
