//! Per-round bookkeeping
//!
//! Every machine taken off the schedule ends the round in exactly one of
//! three ways: halted, branched, or parked after exhausting the budget.

use std::fmt;

/// Counters for one search round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct RoundReport {
    /// Round number, starting at 1
    pub round: usize,

    /// Step budget used for every machine this round
    pub upper_bound: u64,

    /// Best halting run when the round started
    pub best_steps_before: u64,

    /// Best halting run when the round ended
    pub best_steps_after: u64,

    /// Machines taken off the schedule
    pub simulated: usize,

    /// Machines that reached a final state
    pub halted: usize,

    /// Machines that hit an undefined transition
    pub branched: usize,

    /// Machines that ran out of budget and stay live
    pub exhausted: usize,

    /// Children spawned at undefined transitions
    pub spawned: usize,

    /// Live machines left for the next round
    pub frontier_after: usize,
}

impl RoundReport {
    /// Start a report for `round`
    pub fn new(round: usize, upper_bound: u64, best_steps_before: u64) -> Self {
        Self {
            round,
            upper_bound,
            best_steps_before,
            best_steps_after: best_steps_before,
            ..Self::default()
        }
    }

    /// Whether the round found a longer halting run
    pub fn improved(&self) -> bool {
        self.best_steps_after > self.best_steps_before
    }

    /// Every simulated machine is accounted for exactly once
    pub fn is_balanced(&self) -> bool {
        self.simulated == self.halted + self.branched + self.exhausted
            && self.frontier_after == self.exhausted
    }
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "round {}: bound={} best={}->{} simulated={} halted={} branched={} exhausted={} spawned={}",
            self.round,
            self.upper_bound,
            self.best_steps_before,
            self.best_steps_after,
            self.simulated,
            self.halted,
            self.branched,
            self.exhausted,
            self.spawned
        )
    }
}
