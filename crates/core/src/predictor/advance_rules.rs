//! Advance rules interface.
//!
//! This module defines the `AdvanceRules` trait that all prediction
//! strategies implement. A rule set owns the per-cycle movement logic for one
//! variant: which tracked instructions step forward, when the front end
//! stalls, and when a mispredicted branch redirects fetch.

use crate::state::PipelineState;

/// Trait for per-cycle advance rules.
///
/// One call to [`AdvanceRules::advance`] is one clock cycle: the rule set
/// consumes a column and moves the instruction rows according to its
/// prediction strategy. Rule sets may carry run-scoped state (the
/// predict-taken strategy latches its one-shot redirect); such state is
/// cleared by [`AdvanceRules::reset`].
pub trait AdvanceRules {
    /// Advances the animation by one clock cycle.
    ///
    /// # Arguments
    ///
    /// * `state` - Position state to step forward.
    fn advance(&mut self, state: &mut PipelineState);

    /// Clears run-scoped rule state for a fresh run.
    ///
    /// Stateless rule sets keep the default no-op.
    fn reset(&mut self) {}
}
