//! Deterministic engines behind the Toolhub tool suite.
//!
//! The two cores are [`engine`] (unit registry + conversion + display
//! formatting) and [`scoring`] (bounded composite scores + threshold
//! classification). Both are pure: no I/O, no shared mutable state, safe to
//! call from any number of request handlers without coordination.

pub mod config;
pub mod engine;
pub mod error;
pub mod scoring;
pub mod telemetry;
