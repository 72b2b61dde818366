//! Simulator: owns the state, the rule set, and the run statistics for one
//! variant.
//!
//! The finished guard lives here, not in the rule sets: once the column
//! budget is spent, `advance` is a no-op no matter how often the timer keeps
//! firing.

use crate::predictor::{AdvanceRules, PredictorKind, PredictorWrapper};
use crate::state::PipelineState;
use crate::stats::RunStats;

/// Single-variant simulator: position state + advance rules + statistics.
#[derive(Debug)]
pub struct Simulator {
    kind: PredictorKind,
    state: PipelineState,
    rules: PredictorWrapper,
    stats: RunStats,
}

impl Simulator {
    /// Creates a fresh simulator for the given strategy.
    pub fn new(kind: PredictorKind) -> Self {
        Self {
            kind,
            state: PipelineState::new(kind.total_columns()),
            rules: PredictorWrapper::new(kind),
            stats: RunStats::default(),
        }
    }

    /// Advances the animation by one clock cycle.
    ///
    /// Does nothing once the run is finished. Stalls and redirects are
    /// counted by observing the straight-line rows across the step: held
    /// still means a stall, moved backward means a redirect.
    pub fn advance(&mut self) {
        if self.state.is_finished() {
            return;
        }
        let normal1_before = self.state.normal1_row;
        let normal2_before = self.state.normal2_row;
        self.rules.advance(&mut self.state);
        self.stats.cycles += 1;
        if self.state.normal1_row < normal1_before {
            self.stats.redirects += 1;
        } else if self.state.normal1_row == normal1_before
            && self.state.normal2_row == normal2_before
        {
            self.stats.stall_cycles += 1;
        }
        tracing::trace!(
            variant = self.kind.label(),
            column = self.state.column(),
            jump_row = self.state.jump_row,
            normal1_row = self.state.normal1_row,
            normal2_row = self.state.normal2_row,
            "tick"
        );
    }

    /// Returns the run to its initial layout with zeroed statistics and a
    /// re-armed rule set.
    pub fn reset(&mut self) {
        self.state.reset();
        self.rules.reset();
        self.stats = RunStats::default();
    }

    /// Finishes the run immediately without moving any instruction.
    pub const fn cancel(&mut self) {
        self.state.cancel();
    }

    /// Whether the run's column budget is exhausted.
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Strategy this simulator animates.
    pub const fn kind(&self) -> PredictorKind {
        self.kind
    }

    /// Current position state.
    pub const fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Statistics for the run in progress (or just finished).
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }
}
