//! Per-cycle advance rules for each prediction strategy.
//!
//! This module contains the three rule sets the animation can play: no
//! prediction (stall until the branch resolves), predict not-taken (correct
//! guess, no stall), and predict taken (wrong guess, squash and refetch).

pub use self::advance_rules::AdvanceRules;

/// Advance rules trait shared by all strategies.
pub mod advance_rules;

/// No branch prediction (front end stalls at the jump).
pub mod no_predictor;

/// Predict not-taken (correct prediction, lockstep schedule).
pub mod not_taken;

/// Predict taken (misprediction, one-shot squash and refetch).
pub mod taken;

use serde::Deserialize;

use self::{no_predictor::NoPredictor, not_taken::NotTakenPredictor, taken::TakenPredictor};
use crate::grid;
use crate::state::PipelineState;

/// Prediction strategy selector.
///
/// The set is closed: each variant maps to one rule set, one tab label, and
/// one column budget. [`PredictorKind::ALL`] fixes the tab order the front
/// end presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PredictorKind {
    /// No branch prediction; the pipeline stalls until the jump resolves.
    #[default]
    NoPredictor,
    /// Predict not-taken; the correct guess removes the stall entirely.
    PredictNotTaken,
    /// Predict taken; the wrong guess squashes and refetches two instructions.
    PredictTaken,
}

impl PredictorKind {
    /// Every strategy, in tab order.
    pub const ALL: [Self; 3] = [Self::NoPredictor, Self::PredictNotTaken, Self::PredictTaken];

    /// Human-readable tab label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoPredictor => "No Predictor",
            Self::PredictNotTaken => "Predict Not Taken",
            Self::PredictTaken => "Predict Taken",
        }
    }

    /// Column budget for a full run of this strategy.
    ///
    /// The correctly predicted not-taken schedule finishes early by the
    /// cycles the stall would have cost; the other two need the full budget.
    pub const fn total_columns(self) -> usize {
        match self {
            Self::NoPredictor | Self::PredictTaken => grid::TOTAL_COLUMNS,
            Self::PredictNotTaken => grid::TOTAL_COLUMNS - grid::BRANCH_STALL_COLUMNS,
        }
    }
}

/// Enum wrapper for static dispatch of advance rules.
///
/// The strategy set is closed, so a match beats a trait object here: no
/// boxing, and the simulator stays a plain value type.
#[derive(Debug)]
pub enum PredictorWrapper {
    /// No-predictor rules.
    NoPredictor(NoPredictor),
    /// Predict-not-taken rules.
    NotTaken(NotTakenPredictor),
    /// Predict-taken rules.
    Taken(TakenPredictor),
}

impl PredictorWrapper {
    /// Creates the rule set for the given strategy.
    pub const fn new(kind: PredictorKind) -> Self {
        match kind {
            PredictorKind::NoPredictor => Self::NoPredictor(NoPredictor::new()),
            PredictorKind::PredictNotTaken => Self::NotTaken(NotTakenPredictor::new()),
            PredictorKind::PredictTaken => Self::Taken(TakenPredictor::new()),
        }
    }
}

impl AdvanceRules for PredictorWrapper {
    /// Advances one clock cycle using the wrapped strategy's rules.
    fn advance(&mut self, state: &mut PipelineState) {
        match self {
            Self::NoPredictor(rules) => rules.advance(state),
            Self::NotTaken(rules) => rules.advance(state),
            Self::Taken(rules) => rules.advance(state),
        }
    }

    /// Clears the wrapped strategy's run-scoped state.
    fn reset(&mut self) {
        match self {
            Self::NoPredictor(rules) => rules.reset(),
            Self::NotTaken(rules) => rules.reset(),
            Self::Taken(rules) => rules.reset(),
        }
    }
}
