//! Branch prediction pipeline animation library.
//!
//! This crate implements the simulation core behind a terminal animation that
//! teaches how branch prediction changes pipeline behavior. It provides:
//! 1. **Grid:** Fixed geometry of the animation grid (stage rows, cycle columns).
//! 2. **State:** Per-run positions of the three tracked instructions.
//! 3. **Predictors:** Per-cycle advance rules for the no-predictor,
//!    predict-not-taken, and predict-taken schedules.
//! 4. **Simulation:** Per-variant simulators with stall and redirect statistics.
//! 5. **Control:** Tab lifecycle and shared-timer scheduling for the front end.
//!
//! The crate is presentation-free: a front end owns the clock and the screen,
//! drives [`CycleController::poll`] from its event loop, and paints whatever
//! [`PipelineState`] says.

/// Animation timing configuration (defaults, JSON loading).
pub mod config;
/// Tab lifecycle and shared-timer scheduling.
pub mod controller;
/// Fixed grid geometry shared by the rule sets and the front end.
pub mod grid;
/// Per-cycle advance rules for each prediction strategy.
pub mod predictor;
/// Per-variant simulator (state + rules + statistics).
pub mod simulator;
/// Mutable position state for one animation run.
pub mod state;
/// Per-run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load JSON with `Config::from_file`.
pub use crate::config::Config;
/// Scheduling owner; construct with `CycleController::new` and drive with `poll`.
pub use crate::controller::CycleController;
/// Prediction strategy selector; fixes tab order via `PredictorKind::ALL`.
pub use crate::predictor::PredictorKind;
/// Single-variant simulator; owns state, rules, and statistics.
pub use crate::simulator::Simulator;
/// Position state consumed by the front end when painting a frame.
pub use crate::state::PipelineState;
