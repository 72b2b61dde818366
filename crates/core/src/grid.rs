//! Fixed geometry of the animation grid.
//!
//! The animation plays on a grid of clock-cycle columns and instruction rows.
//! Rows are split into three bands, top to bottom:
//! 1. **Waiting:** Instructions that have not entered the pipeline yet.
//! 2. **Stages:** One row per pipeline stage (fetch through write-back).
//! 3. **Completed:** Instructions that have left the pipeline.
//!
//! The geometry is deliberately not configurable. Every rule set in
//! [`crate::predictor`] is hand-tuned against these constants so that a full
//! run walks each instruction from its start row to the bottom of the grid in
//! exactly the variant's column budget.

/// Number of clock-cycle columns in a full (stalled) run.
///
/// This is the column budget for the no-predictor and predict-taken
/// schedules; a run is finished once this many cycles have elapsed.
pub const TOTAL_COLUMNS: usize = 10;

/// Columns saved by a correct not-taken prediction.
///
/// The front end keeps fetching the fall-through path instead of stalling for
/// branch resolution, so the predict-not-taken schedule finishes this many
/// cycles earlier than the stalled one.
pub const BRANCH_STALL_COLUMNS: usize = 2;

/// Total number of grid rows (waiting band + stages + completed band).
pub const TOTAL_ROWS: usize = 11;

/// First usable row; row 0 is reserved for the clock-cycle header.
pub const ROW_START: usize = 1;

/// Row of the last (bottom) grid position. Instructions park here when done.
pub const BOTTOM_ROW: usize = TOTAL_ROWS - 1;

/// Display names of the pipeline stages, in row order.
pub const STAGE_NAMES: [&str; 4] = ["Fetch", "Decode", "Execute", "WB"];

/// Number of pipeline stage rows.
pub const STAGE_COUNT: usize = STAGE_NAMES.len();

/// Row of the first pipeline stage (fetch).
pub const PIPELINE_ROW: usize = 4;

/// Row of the execute stage, where a branch resolves.
///
/// A conditional jump below this row has produced its outcome; rule sets gate
/// front-end progress on `jump_row > EXECUTE_ROW`.
pub const EXECUTE_ROW: usize = PIPELINE_ROW + 2;

/// Last waiting row, directly above the fetch stage.
///
/// An instruction on this row enters the pipeline on its next step. The
/// no-predictor rules keep younger instructions moving until they pile up
/// here, then hold them until the branch resolves.
pub const ENTRY_ROW: usize = PIPELINE_ROW - 1;

/// Start row of the second straight-line instruction (youngest of the three).
pub const NORMAL2_START_ROW: usize = ROW_START;

/// Start row of the first straight-line instruction.
pub const NORMAL1_START_ROW: usize = ROW_START + 1;

/// Start row of the conditional jump (oldest of the three, enters first).
pub const JUMP_START_ROW: usize = ROW_START + 2;

/// Row the first straight-line instruction restarts from after a taken-branch
/// redirect squashes the speculative fall-through fetch.
pub const REDIRECT_NORMAL1_ROW: usize = ROW_START + 3;

/// Row the second straight-line instruction restarts from after a redirect.
pub const REDIRECT_NORMAL2_ROW: usize = ROW_START + 2;
