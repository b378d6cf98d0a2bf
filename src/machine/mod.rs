//! Turing machine representation and execution
//!
//! Single-tape machines over symbols `0..k` with a partial transition
//! function:
//! - Blank symbol 0, tape unbounded in both directions
//! - State 0 is the conventional halt (final) state
//! - Missing rules stop execution with [`StepOutcome::UndefinedTransition`]

mod tape;
mod transition;

pub use tape::Tape;
pub use transition::{Configuration, Move, Transition, TransitionTable};

use std::collections::BTreeSet;

/// Tape symbol (element of alphabet Γ = 0..k)
pub type Symbol = u32;

/// Machine state (element of Q = 1..n, plus halt state 0)
pub type State = u32;

/// Identity assigned to each machine spawned by the search
pub type MachineId = u64;

/// Blank symbol
pub const BLANK: Symbol = 0;

/// Halt state targeted by the sentinel halting rule
pub const HALT_STATE: State = 0;

/// Initial state of every machine
pub const INITIAL_STATE: State = 1;

/// Result of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Rule applied
    Continue,

    /// No rule for this configuration; machine left unchanged
    UndefinedTransition(Configuration),
}

/// Result of running a machine under a step budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Reached a final state within the budget
    Halted,

    /// Hit a configuration with no rule
    UndefinedTransition(Configuration),

    /// Step counter reached the budget first
    BudgetExhausted,
}

/// Deterministic single-tape Turing machine with its own tape and head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuringMachine {
    /// Search bookkeeping identity
    id: MachineId,

    /// Tape contents
    tape: Tape,

    /// Head position
    head: i64,

    /// Current control state
    state: State,

    /// Accepting states (conventionally {0})
    final_states: BTreeSet<State>,

    /// Partial transition function
    transitions: TransitionTable,

    /// Number of rules applied so far
    steps: u64,
}

impl TuringMachine {
    /// Create fluent builder
    pub fn builder() -> TuringMachineBuilder {
        TuringMachineBuilder::new()
    }

    /// Seed machine of the search: `(1, 0) -> (1, R, 2)`, identity 0
    pub fn seed() -> Self {
        Self::builder()
            .add_transition(INITIAL_STATE, BLANK, 1, Move::Right, 2)
            .build()
    }

    /// Execute one step
    pub fn step(&mut self) -> StepOutcome {
        let configuration = self.local_configuration();

        let Some(&transition) = self.transitions.get(&configuration) else {
            return StepOutcome::UndefinedTransition(configuration);
        };

        self.tape.write(self.head, transition.write);
        self.head = transition.movement.apply(self.head);
        self.state = transition.next_state;
        self.steps += 1;

        StepOutcome::Continue
    }

    /// Run until final, undefined, or `step_count() >= upper_bound`
    ///
    /// The final-state check happens before each step, so a machine that
    /// halts exactly on the budget reports [`RunOutcome::BudgetExhausted`].
    pub fn run(&mut self, upper_bound: u64) -> RunOutcome {
        while self.steps < upper_bound {
            if self.is_final() {
                return RunOutcome::Halted;
            }
            if let StepOutcome::UndefinedTransition(configuration) = self.step() {
                return RunOutcome::UndefinedTransition(configuration);
            }
        }
        RunOutcome::BudgetExhausted
    }

    /// Check if current state is final
    pub fn is_final(&self) -> bool {
        self.final_states.contains(&self.state)
    }

    /// Current lookup key: (state, symbol under head)
    pub fn local_configuration(&self) -> Configuration {
        Configuration::new(self.state, self.tape.read(self.head))
    }

    /// Insert or overwrite one rule
    pub fn add_rule(&mut self, key: Configuration, value: Transition) {
        self.transitions.insert(key, value);
    }

    /// Deep copy with a fresh identity and one extra rule
    pub fn spawn_child(&self, id: MachineId, key: Configuration, value: Transition) -> Self {
        let mut child = self.clone();
        child.id = id;
        child.add_rule(key, value);
        child
    }

    /// Get identity
    pub fn id(&self) -> MachineId {
        self.id
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get head position
    pub fn head(&self) -> i64 {
        self.head
    }

    /// Get tape
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Allocated tape rendered as `...<cells>...`
    pub fn tape_string(&self) -> String {
        format!("...{}...", self.tape)
    }

    /// Get transition function
    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// Get final states
    pub fn final_states(&self) -> &BTreeSet<State> {
        &self.final_states
    }

    /// Number of steps executed
    pub fn step_count(&self) -> u64 {
        self.steps
    }
}

/// Builder for Turing machines (fluent API)
#[derive(Debug)]
pub struct TuringMachineBuilder {
    id: MachineId,
    initial_state: State,
    final_states: Option<BTreeSet<State>>,
    transitions: TransitionTable,
}

impl TuringMachineBuilder {
    /// Create new builder
    pub fn new() -> Self {
        Self {
            id: 0,
            initial_state: INITIAL_STATE,
            final_states: None,
            transitions: TransitionTable::new(),
        }
    }

    /// Set identity
    pub fn id(mut self, id: MachineId) -> Self {
        self.id = id;
        self
    }

    /// Set initial state
    pub fn initial_state(mut self, state: State) -> Self {
        self.initial_state = state;
        self
    }

    /// Set final states (default {0})
    pub fn final_states<I: IntoIterator<Item = State>>(mut self, states: I) -> Self {
        self.final_states = Some(states.into_iter().collect());
        self
    }

    /// Add a transition rule
    pub fn add_transition(
        mut self,
        from_state: State,
        read_symbol: Symbol,
        write_symbol: Symbol,
        movement: Move,
        to_state: State,
    ) -> Self {
        self.transitions.insert(
            Configuration::new(from_state, read_symbol),
            Transition::new(write_symbol, movement, to_state),
        );
        self
    }

    /// Build the Turing machine
    pub fn build(self) -> TuringMachine {
        TuringMachine {
            id: self.id,
            tape: Tape::new(),
            head: 0,
            state: self.initial_state,
            final_states: self
                .final_states
                .unwrap_or_else(|| BTreeSet::from([HALT_STATE])),
            transitions: self.transitions,
            steps: 0,
        }
    }
}
