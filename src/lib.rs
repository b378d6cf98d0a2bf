//! # Busy Beaver Search by Budgeted Enumeration
//!
//! This library searches the (n-state, k-symbol) Turing machine class for
//! the longest-running halting machine, building transition functions one
//! rule at a time.
//!
//! ## Core Algorithm
//!
//! 1. **Seed**: start from `(1, 0) -> (1, R, 2)` on a blank tape
//! 2. **Simulate**: run each live machine under a step budget
//! 3. **Branch**: at an undefined transition, spawn one child per possible
//!    rule (`2 · n · k` of them) plus one halting child
//! 4. **Repeat**: rerun the survivors with budget `2 · best` until a round
//!    finds no longer halting run
//!
//! The budget is a heuristic, so the result is a lower bound on BB(n, k),
//! not a proof.
//!
//! ## Usage Example
//!
//! ```
//! use beaver_search::search;
//!
//! let outcome = search(2, 2)?;
//! assert_eq!(outcome.best_steps, 6);
//! let machine = outcome.best_machine.expect("a halting machine");
//! println!("{}", machine.transitions());
//! # Ok::<(), beaver_search::SearchError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod machine; // Turing machine representation
pub mod search; // Round-based enumeration driver

// Re-exports for convenience
pub use machine::{
    Configuration, MachineId, Move, RunOutcome, State, StepOutcome, Symbol, Tape, Transition,
    TransitionTable, TuringMachine, BLANK, HALT_STATE, INITIAL_STATE,
};
pub use search::{upper_bound, RoundReport, SearchDriver};

use thiserror::Error;

/// Default period of progress log milestones
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 500;

/// Configuration parameters for a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of non-halt states n
    pub states: State,

    /// Alphabet size k (symbols 0..k, 0 is blank)
    pub symbols: Symbol,

    /// Log identity and discovery milestones every this many machines (0 = off)
    pub progress_interval: u64,

    /// Fail instead of growing the frontier past this many machines
    pub max_frontier: Option<usize>,
}

impl SearchConfig {
    /// Configuration for BB(states, symbols) with default diagnostics
    pub fn new(states: State, symbols: Symbol) -> Self {
        Self {
            states,
            symbols,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            max_frontier: None,
        }
    }

    /// Set milestone period
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Bound the frontier size
    pub fn with_max_frontier(mut self, limit: usize) -> Self {
        self.max_frontier = Some(limit);
        self
    }

    /// Check that the machine class is non-empty
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.states == 0 || self.symbols == 0 {
            return Err(SearchError::InvalidParameters {
                states: self.states,
                symbols: self.symbols,
            });
        }
        Ok(())
    }
}

/// Result of a search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Longest halting run found (0 if none)
    pub best_steps: u64,

    /// Machine that produced it
    pub best_machine: Option<TuringMachine>,

    /// One report per round, in order
    pub rounds: Vec<RoundReport>,

    /// Children spawned at undefined transitions (the seed is not counted)
    pub machines_spawned: u64,
}

/// Errors that can occur during a search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Empty machine class
    #[error("states and symbols must both be at least 1 (got {states} states, {symbols} symbols)")]
    InvalidParameters {
        /// Requested number of states
        states: State,
        /// Requested number of symbols
        symbols: Symbol,
    },

    /// Frontier would outgrow the configured bound
    #[error("frontier limit of {limit} machines exceeded")]
    FrontierLimitExceeded {
        /// Configured bound
        limit: usize,
    },
}

/// Search BB(states, symbols) with default configuration
pub fn search(states: State, symbols: Symbol) -> Result<SearchOutcome, SearchError> {
    search_with(SearchConfig::new(states, symbols))
}

/// Search with explicit configuration
pub fn search_with(config: SearchConfig) -> Result<SearchOutcome, SearchError> {
    SearchDriver::new(config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_class() {
        assert_eq!(
            search(0, 2).err(),
            Some(SearchError::InvalidParameters {
                states: 0,
                symbols: 2
            })
        );
        assert!(search(2, 0).is_err());
    }

    #[test]
    fn test_config_builders() {
        let config = SearchConfig::new(3, 2)
            .with_progress_interval(100)
            .with_max_frontier(10_000);
        assert_eq!(config.progress_interval, 100);
        assert_eq!(config.max_frontier, Some(10_000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_two_by_two() {
        let outcome = search(2, 2).expect("search succeeds");
        assert_eq!(outcome.best_steps, 6);
        assert_eq!(outcome.rounds.len(), 2);
        assert!(outcome.best_machine.is_some());
        let spawned: usize = outcome.rounds.iter().map(|round| round.spawned).sum();
        assert_eq!(outcome.machines_spawned, spawned as u64);
    }
}
