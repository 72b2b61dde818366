//! # Advance Rule Tests
//!
//! This module aggregates tests for the per-variant advance rules:
//! cycle-exact schedules for each strategy, and invariants that hold for any
//! strategy under arbitrary tick counts.

/// Property tests: grid bounds, monotonicity, and redirect cardinality.
pub mod properties;
