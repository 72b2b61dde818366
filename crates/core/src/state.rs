//! Mutable position state for one animation run.

use crate::grid;

/// Positions of the three tracked instructions plus run progress.
///
/// The rule sets in [`crate::predictor`] mutate the row fields directly; the
/// column counter is private so that it can only move forward one cycle at a
/// time (or jump straight to the end via [`PipelineState::cancel`]).
///
/// Row invariants are maintained by construction: every rule set clamps
/// `jump_row` at [`grid::BOTTOM_ROW`], and the column budget bounds how far
/// the straight-line rows can travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineState {
    /// Row of the first straight-line instruction (fetched right after the jump).
    pub normal1_row: usize,
    /// Row of the second straight-line instruction (youngest of the three).
    pub normal2_row: usize,
    /// Row of the conditional jump (oldest of the three, enters the pipeline first).
    pub jump_row: usize,
    /// Clock cycles elapsed since the last reset.
    column: usize,
    /// Column budget; reaching it means the run is finished.
    total_columns: usize,
}

impl PipelineState {
    /// Creates the initial state for a run of `total_columns` cycles.
    pub const fn new(total_columns: usize) -> Self {
        Self {
            normal1_row: grid::NORMAL1_START_ROW,
            normal2_row: grid::NORMAL2_START_ROW,
            jump_row: grid::JUMP_START_ROW,
            column: 0,
            total_columns,
        }
    }

    /// Restores every position and the column counter to the initial state.
    ///
    /// The column budget is part of the variant, not the run, so it survives.
    pub fn reset(&mut self) {
        *self = Self::new(self.total_columns);
    }

    /// Forces the run into the finished state without touching any row.
    ///
    /// Used when a tab loses focus: its instructions freeze in place and
    /// subsequent ticks become no-ops.
    pub const fn cancel(&mut self) {
        self.column = self.total_columns;
    }

    /// Consumes one cycle of the column budget.
    pub const fn advance_column(&mut self) {
        self.column += 1;
    }

    /// Whether the column budget is exhausted.
    pub const fn is_finished(&self) -> bool {
        self.column >= self.total_columns
    }

    /// Clock cycles elapsed since the last reset.
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Column budget for this variant.
    pub const fn total_columns(&self) -> usize {
        self.total_columns
    }
}
