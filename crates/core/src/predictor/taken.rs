//! Predict taken, mispredicted.
//!
//! The front end fetches the fall-through path while predicting the jump
//! taken. When the jump resolves in execute the prediction turns out wrong:
//! the two speculatively fetched instructions are squashed back above the
//! pipeline and refetched from the branch target. The redirect happens once
//! per run, on the first cycle the jump is past the execute stage.

use super::AdvanceRules;
use crate::grid;
use crate::state::PipelineState;

/// Rule set for the mispredicted taken schedule.
///
/// Carries the one-shot redirect latch; [`AdvanceRules::reset`] re-arms it.
#[derive(Debug, Default)]
pub struct TakenPredictor {
    /// Whether this run's redirect has already fired.
    redirected: bool,
}

impl TakenPredictor {
    /// Creates the predict-taken rule set with the redirect armed.
    pub const fn new() -> Self {
        Self { redirected: false }
    }
}

impl AdvanceRules for TakenPredictor {
    /// Steps all three instructions, then fires the one-shot redirect on the
    /// first cycle the jump has resolved: the straight-line pair snaps back
    /// to the refetch rows above the pipeline.
    fn advance(&mut self, state: &mut PipelineState) {
        state.advance_column();
        if state.jump_row < grid::BOTTOM_ROW {
            state.jump_row += 1;
        }
        state.normal2_row += 1;
        state.normal1_row += 1;
        if state.jump_row > grid::EXECUTE_ROW && !self.redirected {
            state.normal2_row = grid::REDIRECT_NORMAL2_ROW;
            state.normal1_row = grid::REDIRECT_NORMAL1_ROW;
            self.redirected = true;
        }
    }

    /// Re-arms the redirect for the next run.
    fn reset(&mut self) {
        self.redirected = false;
    }
}
