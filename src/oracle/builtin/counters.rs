//! Running totals kept by a context across every solve.

use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// Conflicts found by propagation, at any level.
    pub total_conflicts: usize,

    /// Decisions made, not counting flips from backtracking.
    pub total_decisions: usize,

    /// Passes through the solve loop.
    pub total_iterations: usize,

    /// Time spent inside the solve loop.
    pub time: Duration,
}
