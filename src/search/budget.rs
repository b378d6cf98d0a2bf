//! Step budget heuristic
//!
//! Maps the best halting run found so far to the number of steps a
//! candidate may run before it is set aside for the next round.

use crate::machine::{State, Symbol};

/// Budget multiplier used before any halting machine is known
const SEED_FACTOR: u64 = 3;

/// Headroom over the best known halting run
const GROWTH_FACTOR: u64 = 2;

/// Upper bound on steps for one round
///
/// - no halting machine yet (`best_steps == 0`): `n · k · 3`
/// - otherwise: `best_steps · 2`
pub fn upper_bound(states: State, symbols: Symbol, best_steps: u64) -> u64 {
    if best_steps == 0 {
        u64::from(states)
            .saturating_mul(u64::from(symbols))
            .saturating_mul(SEED_FACTOR)
    } else {
        best_steps.saturating_mul(GROWTH_FACTOR)
    }
}
