//! No branch prediction.
//!
//! The pipeline refuses to fetch past a conditional jump until the jump has
//! resolved in execute. The two straight-line instructions drain toward the
//! pipeline entry and stall there; the bubble only clears once the jump is
//! past the execute stage.

use super::AdvanceRules;
use crate::grid;
use crate::state::PipelineState;

/// Rule set for the unpredicted (fully stalled) schedule.
#[derive(Debug, Default)]
pub struct NoPredictor;

impl NoPredictor {
    /// Creates the no-predictor rule set.
    pub const fn new() -> Self {
        Self
    }
}

impl AdvanceRules for NoPredictor {
    /// Steps the jump every cycle; steps the straight-line pair only while
    /// they are still draining toward the entry row or once the jump has
    /// resolved past execute. The cycles in between are the stall.
    fn advance(&mut self, state: &mut PipelineState) {
        state.advance_column();
        if state.jump_row < grid::BOTTOM_ROW {
            state.jump_row += 1;
        }
        if state.jump_row > grid::EXECUTE_ROW || state.normal1_row < grid::ENTRY_ROW {
            state.normal2_row += 1;
            state.normal1_row += 1;
        }
    }
}
