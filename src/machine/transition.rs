//! Transition function δ: Q × Γ → Γ × {L,R} × Q
//!
//! Tables are partial during search: a missing entry is an undefined
//! transition, which the driver fills in one rule at a time.

use super::{State, Symbol, BLANK, HALT_STATE};
use std::collections::BTreeMap;
use std::fmt;

/// Lookup key: (state, symbol under head)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Configuration {
    /// Current control state
    pub state: State,

    /// Symbol under the head
    pub symbol: Symbol,
}

impl Configuration {
    /// Create configuration key
    pub fn new(state: State, symbol: Symbol) -> Self {
        Self { state, symbol }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.state, self.symbol)
    }
}

/// Head movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Move {
    /// Move left (decrement position)
    Left,

    /// Move right (increment position)
    Right,
}

impl Move {
    /// Both directions, in enumeration order
    pub const ALL: [Move; 2] = [Move::Left, Move::Right];

    /// Apply move to position
    pub fn apply(&self, position: i64) -> i64 {
        position + i64::from(self.to_i8())
    }

    /// Encode as integer offset
    pub fn to_i8(&self) -> i8 {
        match self {
            Move::Left => -1,
            Move::Right => 1,
        }
    }

    fn letter(&self) -> char {
        match self {
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Single transition rule: what to write, where to move, where to go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Transition {
    /// Symbol written under the head
    pub write: Symbol,

    /// Head movement
    pub movement: Move,

    /// Next state
    pub next_state: State,
}

impl Transition {
    /// Sentinel halting triple: write blank, move right, enter state 0
    pub const HALT: Transition = Transition {
        write: BLANK,
        movement: Move::Right,
        next_state: HALT_STATE,
    };

    /// Create rule value
    pub fn new(write: Symbol, movement: Move, next_state: State) -> Self {
        Self {
            write,
            movement,
            next_state,
        }
    }

    /// Whether this is the sentinel halting triple
    pub fn is_halt(&self) -> bool {
        *self == Self::HALT
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.write, self.movement, self.next_state)
    }
}

/// Partial transition function, ordered by (state, symbol)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTable {
    rules: BTreeMap<Configuration, Transition>,
}

impl TransitionTable {
    /// Create empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the rule for `key`
    pub fn insert(&mut self, key: Configuration, value: Transition) {
        self.rules.insert(key, value);
    }

    /// Look up rule for `key`
    pub fn get(&self, key: &Configuration) -> Option<&Transition> {
        self.rules.get(key)
    }

    /// Number of defined entries
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no entry is defined
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate entries in (state, symbol) order
    pub fn iter(&self) -> impl Iterator<Item = (&Configuration, &Transition)> + '_ {
        self.rules.iter()
    }

    /// Count entries equal to the sentinel halting triple
    pub fn halting_rules(&self) -> usize {
        self.rules.values().filter(|rule| rule.is_halt()).count()
    }

    /// Whether any entry is the sentinel halting triple
    pub fn contains_halting_rule(&self) -> bool {
        self.rules.values().any(Transition::is_halt)
    }

    /// Whether `self` defines every entry of `other` identically and at least one more
    pub fn is_strict_superset_of(&self, other: &TransitionTable) -> bool {
        self.len() > other.len()
            && other
                .iter()
                .all(|(key, value)| self.rules.get(key) == Some(value))
    }

    /// Compact bbchallenge-style text, e.g. `1RB0LA_1LA---`
    ///
    /// States are lettered from `A` (state 1); the halt state is `Z` and
    /// undefined entries render as `---`. Rows run up to the larger of
    /// `states` and the highest state the table mentions.
    pub fn standard_format(&self, states: State, symbols: Symbol) -> String {
        let highest = self
            .rules
            .iter()
            .flat_map(|(key, value)| [key.state, value.next_state])
            .max()
            .unwrap_or(0);
        let rows = states.max(highest);

        let mut out = String::new();
        for state in 1..=rows {
            if state > 1 {
                out.push('_');
            }
            for symbol in 0..symbols {
                match self.rules.get(&Configuration::new(state, symbol)) {
                    Some(rule) => {
                        out.push(digit(rule.write));
                        out.push(rule.movement.letter());
                        out.push(state_letter(rule.next_state));
                    }
                    None => out.push_str("---"),
                }
            }
        }
        out
    }
}

impl fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.rules.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

fn digit(symbol: Symbol) -> char {
    char::from_digit(symbol, 36).unwrap_or('?')
}

fn state_letter(state: State) -> char {
    match state {
        HALT_STATE => 'Z',
        s if s <= 25 => (b'A' + (s - 1) as u8) as char,
        _ => '?',
    }
}
