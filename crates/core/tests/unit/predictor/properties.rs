//! # Advance Rule Properties
//!
//! Property tests over all strategies and arbitrary tick counts: instructions
//! never leave the grid, the column counter is monotone and capped, and the
//! taken-branch redirect is a one-shot.

use pipevis_core::grid;
use pipevis_core::predictor::PredictorKind;
use pipevis_core::simulator::Simulator;
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = PredictorKind> {
    prop_oneof![
        Just(PredictorKind::NoPredictor),
        Just(PredictorKind::PredictNotTaken),
        Just(PredictorKind::PredictTaken),
    ]
}

proptest! {
    /// No instruction ever leaves the grid, however long the timer fires.
    #[test]
    fn rows_stay_on_grid(kind in any_kind(), ticks in 0usize..64) {
        let mut sim = Simulator::new(kind);
        for _ in 0..ticks {
            sim.advance();
            let state = sim.state();
            prop_assert!(state.jump_row <= grid::BOTTOM_ROW);
            prop_assert!(state.normal1_row <= grid::BOTTOM_ROW);
            prop_assert!(state.normal2_row <= grid::BOTTOM_ROW);
        }
    }

    /// The column counter never decreases and never exceeds the budget.
    #[test]
    fn column_is_monotone_and_capped(kind in any_kind(), ticks in 0usize..64) {
        let mut sim = Simulator::new(kind);
        let mut last = sim.state().column();
        for _ in 0..ticks {
            sim.advance();
            let column = sim.state().column();
            prop_assert!(column >= last, "column went backward");
            prop_assert!(column <= sim.state().total_columns());
            last = column;
        }
    }

    /// Once the budget is spent the state is fixed: extra ticks change nothing.
    #[test]
    fn finished_state_is_a_fixpoint(kind in any_kind(), extra in 1usize..32) {
        let mut sim = Simulator::new(kind);
        for _ in 0..kind.total_columns() {
            sim.advance();
        }
        let frozen = sim.state().clone();
        for _ in 0..extra {
            sim.advance();
        }
        prop_assert_eq!(sim.state().clone(), frozen);
    }

    /// The straight-line rows only ever move backward on the taken-branch
    /// squash, and that happens at most once per run.
    #[test]
    fn rows_move_backward_at_most_once(kind in any_kind(), ticks in 0usize..64) {
        let mut sim = Simulator::new(kind);
        let mut backward_steps = 0;
        let mut last_normal1 = sim.state().normal1_row;
        for _ in 0..ticks {
            sim.advance();
            if sim.state().normal1_row < last_normal1 {
                backward_steps += 1;
            }
            last_normal1 = sim.state().normal1_row;
        }
        let limit = u32::from(kind == PredictorKind::PredictTaken);
        prop_assert!(backward_steps <= limit, "squashes: {backward_steps}");
        prop_assert_eq!(u64::from(backward_steps), sim.stats().redirects);
    }
}
