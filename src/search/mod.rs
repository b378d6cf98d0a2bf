//! Round-based enumeration of partial transition functions
//!
//! Each round simulates every live machine under one step budget:
//! 1. **Halted**: record it if it beats the best run, then drop it
//! 2. **Undefined transition**: drop it and spawn one child per possible
//!    rule for the missing configuration (plus a halting child)
//! 3. **Budget exhausted**: keep it live for the next round
//!
//! Rounds repeat with a budget derived from the best run until a round
//! finds nothing longer.

mod budget;
mod frontier;
mod report;

pub use budget::upper_bound;
pub use frontier::Frontier;
pub use report::RoundReport;

use crate::machine::{Configuration, MachineId, Move, RunOutcome, Transition, TuringMachine};
use crate::{SearchConfig, SearchError, SearchOutcome};
use tracing::{debug, info};

/// Search state threaded through rounds
#[derive(Debug)]
pub struct SearchDriver {
    config: SearchConfig,

    /// Live machines
    frontier: Frontier,

    /// Longest halting run seen
    best_steps: u64,

    /// Machine that produced `best_steps`
    best_machine: Option<TuringMachine>,

    /// Identity for the next spawned machine
    next_id: MachineId,

    /// Completed rounds
    rounds: Vec<RoundReport>,
}

impl SearchDriver {
    /// Validate configuration and seed the frontier
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;

        let seed = TuringMachine::seed();
        let next_id = seed.id() + 1;
        let mut frontier = Frontier::new();
        frontier.push(seed);

        Ok(Self {
            config,
            frontier,
            best_steps: 0,
            best_machine: None,
            next_id,
            rounds: Vec::new(),
        })
    }

    /// Run rounds until one brings no improvement
    pub fn run(mut self) -> Result<SearchOutcome, SearchError> {
        loop {
            let report = self.run_round()?;
            if !report.improved() {
                break;
            }
        }
        Ok(self.finish())
    }

    /// Run exactly one round and record its report
    pub fn run_round(&mut self) -> Result<RoundReport, SearchError> {
        let bound = upper_bound(self.config.states, self.config.symbols, self.best_steps);
        let mut report = RoundReport::new(self.rounds.len() + 1, bound, self.best_steps);

        info!(
            round = report.round,
            best_steps = self.best_steps,
            upper_bound = bound,
            frontier = self.frontier.len(),
            "starting round"
        );

        self.frontier.schedule_all();
        while let Some(mut machine) = self.frontier.take_next() {
            report.simulated += 1;
            if self.is_milestone(machine.id()) {
                debug!(id = machine.id(), "analyzing machine");
            }

            match machine.run(bound) {
                RunOutcome::Halted => {
                    report.halted += 1;
                    self.record_halt(machine);
                }
                RunOutcome::UndefinedTransition(configuration) => {
                    match self.branch(&machine, configuration) {
                        Ok(spawned) => {
                            report.branched += 1;
                            report.spawned += spawned;
                        }
                        Err(err) => {
                            // Nothing was spawned; keep the parent live
                            self.frontier.park(machine);
                            return Err(err);
                        }
                    }
                }
                RunOutcome::BudgetExhausted => {
                    report.exhausted += 1;
                    self.frontier.park(machine);
                }
            }
        }

        report.best_steps_after = self.best_steps;
        report.frontier_after = self.frontier.len();
        debug!(%report, "round finished");

        self.rounds.push(report);
        Ok(report)
    }

    /// Consume the driver into its result
    pub fn finish(self) -> SearchOutcome {
        let machines_spawned = self.machines_spawned();
        SearchOutcome {
            best_steps: self.best_steps,
            best_machine: self.best_machine,
            rounds: self.rounds,
            machines_spawned,
        }
    }

    /// Longest halting run seen so far
    pub fn best_steps(&self) -> u64 {
        self.best_steps
    }

    /// Machine behind [`SearchDriver::best_steps`]
    pub fn best_machine(&self) -> Option<&TuringMachine> {
        self.best_machine.as_ref()
    }

    /// Live machines
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Children spawned so far (the seed is not counted)
    pub fn machines_spawned(&self) -> u64 {
        self.next_id - (TuringMachine::seed().id() + 1)
    }

    /// Reports of completed rounds
    pub fn rounds(&self) -> &[RoundReport] {
        &self.rounds
    }

    /// Search parameters
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn record_halt(&mut self, machine: TuringMachine) {
        if machine.step_count() > self.best_steps {
            self.best_steps = machine.step_count();
            info!(
                steps = self.best_steps,
                id = machine.id(),
                "new candidate"
            );
            self.best_machine = Some(machine);
        }
    }

    /// Spawn children filling `configuration`; returns how many
    ///
    /// Either every child is spawned or, if the frontier limit would be
    /// exceeded, none is.
    fn branch(
        &mut self,
        parent: &TuringMachine,
        configuration: Configuration,
    ) -> Result<usize, SearchError> {
        let rules = self.child_rules(parent);

        if let Some(limit) = self.config.max_frontier {
            if self.frontier.len() + rules.len() > limit {
                return Err(SearchError::FrontierLimitExceeded { limit });
            }
        }

        for &rule in &rules {
            self.spawn(parent, configuration, rule);
        }
        Ok(rules.len())
    }

    /// Rules for the children of `parent`, in spawn order
    fn child_rules(&self, parent: &TuringMachine) -> Vec<Transition> {
        let table = parent.transitions();
        let class_size = self.config.states as usize * self.config.symbols as usize;
        // A halt is the only choice left for the last undefined entry
        let only_halt_left =
            table.len() == class_size.saturating_sub(1) && !table.contains_halting_rule();

        let mut rules = Vec::new();
        if !only_halt_left {
            for symbol in 0..self.config.symbols {
                for state in 1..=self.config.states {
                    for movement in Move::ALL {
                        rules.push(Transition::new(symbol, movement, state));
                    }
                }
            }
        }
        if !table.contains_halting_rule() {
            rules.push(Transition::HALT);
        }
        rules
    }

    fn spawn(&mut self, parent: &TuringMachine, configuration: Configuration, rule: Transition) {
        let child = parent.spawn_child(self.next_id, configuration, rule);
        self.frontier.push(child);

        self.next_id += 1;
        if self.is_milestone(self.next_id) {
            debug!(machines = self.next_id, "machines discovered");
        }
    }

    fn is_milestone(&self, count: u64) -> bool {
        self.config.progress_interval != 0 && count % self.config.progress_interval == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(states: u32, symbols: u32) -> SearchDriver {
        SearchDriver::new(SearchConfig::new(states, symbols)).expect("valid parameters")
    }

    #[test]
    fn test_seed_round_spawns_children() {
        let mut driver = driver(2, 2);
        assert_eq!(driver.frontier().len(), 1);

        let report = driver.run_round().expect("round succeeds");
        assert_eq!(report.round, 1);
        assert_eq!(report.upper_bound, 12);
        assert!(report.spawned >= 2 * 2 * 2 + 1);
        assert!(report.is_balanced());
    }

    #[test]
    fn test_last_entry_only_gets_halting_child() {
        // 1 state x 2 symbols: the seed already fills 1 of 2 entries
        let mut driver = driver(1, 2);
        let report = driver.run_round().expect("round succeeds");

        assert_eq!(report.spawned, 1);
        assert_eq!(report.halted, 1);
        assert_eq!(driver.best_steps(), 2);
        let best = driver.best_machine().expect("halting machine");
        assert_eq!(best.id(), 1);
        assert_eq!(best.transitions().halting_rules(), 1);
    }

    #[test]
    fn test_branch_counts() {
        let mut driver = driver(3, 2);
        let mut parent = TuringMachine::seed();
        parent.step();

        let spawned = driver
            .branch(&parent, parent.local_configuration())
            .expect("no frontier limit");

        assert_eq!(spawned, 2 * 3 * 2 + 1);
        // The seed is still live in this driver
        assert_eq!(driver.frontier().len(), spawned + 1);
        let halting: Vec<_> = driver
            .frontier()
            .iter()
            .filter(|m| m.transitions().contains_halting_rule())
            .collect();
        assert_eq!(halting.len(), 1);
    }

    #[test]
    fn test_no_halting_child_when_table_already_halts() {
        let mut driver = driver(2, 2);
        let mut parent = TuringMachine::seed();
        parent.add_rule(Configuration::new(2, 1), Transition::HALT);
        parent.step();

        let spawned = driver
            .branch(&parent, parent.local_configuration())
            .expect("no frontier limit");
        assert_eq!(spawned, 2 * 2 * 2);
    }

    #[test]
    fn test_frontier_limit() {
        let config = SearchConfig::new(2, 3).with_max_frontier(4);
        let result = SearchDriver::new(config).and_then(SearchDriver::run);

        assert!(matches!(
            result,
            Err(SearchError::FrontierLimitExceeded { limit: 4 })
        ));
    }

    #[test]
    fn test_frontier_limit_leaves_driver_unchanged() {
        let mut driver =
            SearchDriver::new(SearchConfig::new(2, 3).with_max_frontier(4)).expect("valid");

        let result = driver.run_round();

        assert_eq!(result, Err(SearchError::FrontierLimitExceeded { limit: 4 }));
        let live: Vec<MachineId> = driver.frontier().iter().map(TuringMachine::id).collect();
        assert_eq!(live, vec![0]);
        assert_eq!(driver.machines_spawned(), 0);
        assert!(driver.rounds().is_empty());

        // The parked seed branches immediately once the limit allows it
        let seed = driver.frontier().iter().next().expect("seed is live");
        assert_eq!(seed.step_count(), 1);
        assert_eq!(driver.child_rules(seed).len(), 2 * 3 * 2 + 1);
    }

    #[test]
    fn test_frontier_limit_allows_exact_fit() {
        // Seed branches into 2 * 2 * 2 + 1 children
        let mut driver =
            SearchDriver::new(SearchConfig::new(2, 2).with_max_frontier(9)).expect("valid");
        let mut parent = TuringMachine::seed();
        parent.step();
        driver.frontier.take_next();

        let spawned = driver
            .branch(&parent, parent.local_configuration())
            .expect("fits exactly");
        assert_eq!(spawned, 9);
        assert_eq!(driver.frontier().len(), 9);
        assert_eq!(driver.machines_spawned(), 9);
    }

    #[test]
    fn test_milestones_disabled() {
        let driver = SearchDriver::new(SearchConfig::new(2, 2).with_progress_interval(0))
            .expect("valid parameters");
        assert!(!driver.is_milestone(500));
    }
}
