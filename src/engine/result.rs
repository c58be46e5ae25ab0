// src/engine/result.rs
//! Evaluation results

use crate::engine::capacity::gcd;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Net direction of the task when all agents run together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Combined efficiency is positive
    Filling,

    /// Combined efficiency is negative
    Emptying,

    /// Combined efficiency is exactly zero; the level never changes
    Stalled,
}

impl Outcome {
    /// Classify a combined efficiency by its sign
    pub fn from_combined(combined: i64) -> Self {
        match combined.cmp(&0) {
            Ordering::Greater => Outcome::Filling,
            Ordering::Less => Outcome::Emptying,
            Ordering::Equal => Outcome::Stalled,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Filling => "Filling",
            Outcome::Emptying => "Emptying",
            Outcome::Stalled => "Stalled",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact time to fill or empty the task, as a fraction in lowest terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CompletionTime {
    numerator: u64,
    denominator: u64,
}

impl CompletionTime {
    /// Reduced fraction `numerator / denominator`; `None` for a zero denominator
    pub fn new(numerator: u64, denominator: u64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let g = gcd(numerator, denominator).max(1);
        Some(Self {
            numerator: numerator / g,
            denominator: denominator / g,
        })
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Nearest `f64`, for display and interop
    pub fn as_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// True when the fraction is a whole number of time-units
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Exact textual form: `"12"` or `"60/7"`
    pub fn to_exact_string(&self) -> String {
        if self.is_integer() {
            self.numerator.to_string()
        } else {
            format!("{}/{}", self.numerator, self.denominator)
        }
    }
}

impl fmt::Display for CompletionTime {
    /// Decimal rendering; honours `{:.N}` and defaults to two places
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.*}", precision, self.as_f64())
    }
}

/// Full output of one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateResult {
    /// LCM of all agent times
    pub capacity: u64,

    /// Signed efficiency per agent, in input order
    pub efficiencies: Vec<i64>,

    pub combined_efficiency: i64,

    pub outcome: Outcome,

    /// `None` exactly when the outcome is `Stalled`
    pub completion_time: Option<CompletionTime>,
}

impl RateResult {
    pub fn is_stalled(&self) -> bool {
        self.outcome == Outcome::Stalled
    }
}
