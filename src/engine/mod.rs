// src/engine/mod.rs
//! Pipe and cistern rate engine
//!
//! This module holds the only part of the crate with real logic:
//!
//! - **Agent**: inlet/outlet pipes and their time-to-fill
//! - **Capacity**: shared task size as the LCM of all agent times
//! - **Efficiency**: signed per-agent rates derived from the capacity
//! - **Result**: outcome, combined rate and exact completion time
//! - **Rate Engine**: validation and the end-to-end evaluation
//!
//! # Pipeline
//!
//! ```text
//! [(time, kind); N]
//!     │ validate (time > 0)
//!     ▼
//! capacity = lcm(time_1, ..., time_N)
//!     │
//!     ▼
//! efficiency_i = ±capacity / time_i
//!     │
//!     ▼
//! combined = Σ efficiency_i ──► 0  → Stalled
//!     │                     ──► >0 → Filling  (capacity / combined)
//!     ▼                     ──► <0 → Emptying (capacity / |combined|)
//! RateResult
//! ```
//!
//! All values are computed exactly on integers; the completion time is kept
//! as a reduced fraction and only rounded when displayed.

pub mod agent;
pub mod capacity;
pub mod efficiency;
pub mod rate_engine;
pub mod result;

// Re-export commonly used types
pub use agent::{AgentKind, AgentSpec, RawTime};
pub use capacity::{compute_capacity, gcd, lcm};
pub use efficiency::{compute_efficiency, try_compute_efficiency};
pub use rate_engine::{evaluate, RateEngine};
pub use result::{CompletionTime, Outcome, RateResult};
