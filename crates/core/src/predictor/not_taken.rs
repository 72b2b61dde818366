//! Predict not-taken.
//!
//! The front end assumes every conditional jump falls through and keeps
//! fetching the straight-line path. The jump in this scenario is in fact not
//! taken, so nothing is squashed and all three instructions march in
//! lockstep. The run's column budget is shorter by
//! [`grid::BRANCH_STALL_COLUMNS`]: the cycles the stall would have cost.

use super::AdvanceRules;
use crate::grid;
use crate::state::PipelineState;

/// Rule set for the correctly predicted not-taken schedule.
#[derive(Debug, Default)]
pub struct NotTakenPredictor;

impl NotTakenPredictor {
    /// Creates the predict-not-taken rule set.
    pub const fn new() -> Self {
        Self
    }
}

impl AdvanceRules for NotTakenPredictor {
    /// Steps all three instructions every cycle, clamping the jump at the
    /// bottom of the grid.
    fn advance(&mut self, state: &mut PipelineState) {
        state.advance_column();
        if state.jump_row < grid::BOTTOM_ROW {
            state.jump_row += 1;
        }
        state.normal2_row += 1;
        state.normal1_row += 1;
    }
}
