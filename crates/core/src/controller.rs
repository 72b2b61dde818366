//! Tab lifecycle and shared-timer scheduling.
//!
//! This module owns one simulator per strategy and decides when each of them
//! ticks. It provides:
//! 1. **Lifecycle:** Per-tab `Idle -> Running -> Terminal` phases driven by
//!    focus (reset and arm) and leave (cancel).
//! 2. **Scheduling:** One logical timer per tab, armed on first focus and
//!    never torn down; [`CycleController::poll`] fires every due tick.
//! 3. **Deadlines:** [`CycleController::next_deadline`] for the front end's
//!    event-loop timeout.
//!
//! All time is injected as [`Instant`] arguments, so scheduling is
//! deterministic under test and the controller never reads a clock itself.
//! Nothing here locks: the front end drives everything from one thread.
//!
//! Deliberate behavior worth knowing: a timer fires forever once armed.
//! Ticks on a finished run are no-ops, and re-focusing a tab resets its
//! simulator so the still-armed timer resumes visible work. That is what
//! makes every tab replayable by switching away and back.

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::predictor::PredictorKind;
use crate::simulator::Simulator;

/// Lifecycle phase of one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Never focused: no timer armed, initial positions on display.
    Idle,
    /// Timer armed and the run still has column budget left.
    Running,
    /// Finished or cancelled: ticks are no-ops until the next focus.
    Terminal,
}

/// Timer bookkeeping for one tab.
#[derive(Debug)]
struct CycleTask {
    simulator: Simulator,
    /// Set on first focus, never cleared: the timer outlives the run.
    armed: bool,
    /// Next due time. `None` until armed, or when the deadline would pass
    /// the clock's range; a parked timer is never due.
    next_tick: Option<Instant>,
}

impl CycleTask {
    fn new(kind: PredictorKind) -> Self {
        Self {
            simulator: Simulator::new(kind),
            armed: false,
            next_tick: None,
        }
    }

    fn phase(&self) -> RunPhase {
        if self.simulator.is_finished() {
            RunPhase::Terminal
        } else if self.armed {
            RunPhase::Running
        } else {
            RunPhase::Idle
        }
    }
}

/// Owns every tab's simulator and timer; the front end's single entry point
/// for driving the animation.
#[derive(Debug)]
pub struct CycleController {
    /// One task per strategy, in [`PredictorKind::ALL`] order.
    tasks: Vec<CycleTask>,
    active: usize,
    tick_period: Duration,
    first_tick_delay: Duration,
}

impl CycleController {
    /// Builds a controller with one idle simulator per strategy.
    ///
    /// The initially active tab comes from the configuration; nothing is
    /// armed until [`CycleController::start`].
    pub fn new(config: &Config) -> Self {
        let tasks = PredictorKind::ALL.iter().copied().map(CycleTask::new).collect();
        let active = PredictorKind::ALL
            .iter()
            .position(|&kind| kind == config.initial_variant)
            .unwrap_or(0);
        Self {
            tasks,
            active,
            tick_period: config.tick_period(),
            first_tick_delay: config.first_tick_delay(),
        }
    }

    /// Focuses the initially active tab, arming its timer.
    pub fn start(&mut self, now: Instant) {
        self.focus(self.active, now);
    }

    /// Switches to the tab at `index`.
    ///
    /// A no-op when `index` is already active or out of range. Otherwise the
    /// outgoing tab is cancelled and the incoming one focused.
    pub fn select(&mut self, index: usize, now: Instant) {
        if index == self.active || index >= self.tasks.len() {
            return;
        }
        self.leave(self.active);
        self.active = index;
        self.focus(index, now);
    }

    /// Fires every armed timer that is due at `now`.
    ///
    /// Each due timer is rescheduled one period after `now` (late polls
    /// drift rather than burst) and its simulator advanced; finished runs
    /// swallow the tick. Returns whether the active tab did visible work,
    /// which is the front end's cue to repaint.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut active_ticked = false;
        for (index, task) in self.tasks.iter_mut().enumerate() {
            let Some(due) = task.next_tick else { continue };
            if due > now {
                continue;
            }
            task.next_tick = now.checked_add(self.tick_period);
            if task.simulator.is_finished() {
                continue;
            }
            task.simulator.advance();
            if index == self.active {
                active_ticked = true;
            }
        }
        active_ticked
    }

    /// Earliest armed deadline, if any timer has been armed yet.
    ///
    /// Finished runs keep their timers, so after [`CycleController::start`]
    /// this is `Some` for any deadline the clock can represent; the front
    /// end uses it as its poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.iter().filter_map(|task| task.next_tick).min()
    }

    /// Index of the active tab.
    pub const fn active(&self) -> usize {
        self.active
    }

    /// The active tab's simulator.
    pub fn active_simulator(&self) -> &Simulator {
        // tasks is built from PredictorKind::ALL and select() bounds-checks,
        // so active always indexes a task.
        &self.tasks[self.active].simulator
    }

    /// Lifecycle phase of the tab at `index` (out of range reads as idle).
    pub fn phase(&self, index: usize) -> RunPhase {
        self.tasks.get(index).map_or(RunPhase::Idle, CycleTask::phase)
    }

    /// Every simulator, in tab order.
    pub fn simulators(&self) -> impl Iterator<Item = &Simulator> {
        self.tasks.iter().map(|task| &task.simulator)
    }

    /// Focus: reset the simulator and, on first focus only, arm the timer.
    fn focus(&mut self, index: usize, now: Instant) {
        let delay = self.first_tick_delay;
        let Some(task) = self.tasks.get_mut(index) else {
            return;
        };
        task.simulator.reset();
        if !task.armed {
            task.armed = true;
            task.next_tick = now.checked_add(delay);
            tracing::debug!(variant = task.simulator.kind().label(), "timer armed");
        }
        tracing::debug!(variant = task.simulator.kind().label(), "focus: run reset");
    }

    /// Leave: cancel the run so the still-armed timer ticks as a no-op.
    fn leave(&mut self, index: usize) {
        if let Some(task) = self.tasks.get_mut(index) {
            task.simulator.cancel();
            tracing::debug!(variant = task.simulator.kind().label(), "leave: run cancelled");
        }
    }
}
