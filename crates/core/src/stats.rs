//! Per-run statistics collection and reporting.
//!
//! This module tracks what each animation run actually did. It provides:
//! 1. **Progress:** Cycles consumed by the run so far.
//! 2. **Stalls:** Cycles where the straight-line instructions held still.
//! 3. **Redirects:** Mispredicted-branch squashes (at most one per run).

/// Counters for one animation run.
///
/// Zeroed on every reset, so the numbers always describe the run currently
/// on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Clock cycles advanced this run.
    pub cycles: u64,
    /// Cycles where the straight-line instructions did not move.
    pub stall_cycles: u64,
    /// Times a mispredicted branch squashed and refetched the front end.
    pub redirects: u64,
}

impl RunStats {
    /// Prints this run's counters to stdout under the given label.
    ///
    /// Stall percentage divides by at least one cycle so a run that never
    /// started prints 0.00% instead of NaN.
    pub fn print(&self, label: &str) {
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        println!("{label}");
        println!("  cycles.total           {}", self.cycles);
        println!(
            "  cycles.stalled         {} ({:.2}%)",
            self.stall_cycles,
            (self.stall_cycles as f64 / cyc as f64) * 100.0
        );
        println!("  redirects              {}", self.redirects);
        println!("----------------------------------------------------------");
    }
}
