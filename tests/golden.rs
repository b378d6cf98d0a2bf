//! Golden values for small machine classes
//!
//! Recorded from the seeded construction `(1, 0) -> (1, R, 2)`, which
//! reaches outside the class when only one state is requested.

use beaver_search::search;
use test_case::test_case;

#[test_case(1, 1 => (3, 6); "one state one symbol")]
#[test_case(1, 2 => (2, 1); "one state two symbols")]
#[test_case(1, 3 => (3, 8); "one state three symbols")]
#[test_case(2, 1 => (2, 1); "two states one symbol")]
#[test_case(3, 1 => (3, 8); "three states one symbol")]
#[test_case(2, 2 => (6, 47); "two states two symbols")]
#[test_case(2, 3 => (38, 3698); "two states three symbols")]
#[test_case(3, 2 => (21, 5435); "three states two symbols")]
fn best_steps_and_winner(states: u32, symbols: u32) -> (u64, u64) {
    let outcome = search(states, symbols).expect("search succeeds");
    let best = outcome.best_machine.expect("a halting machine");
    assert_eq!(best.step_count(), outcome.best_steps);
    (outcome.best_steps, best.id())
}

#[test_case(1, 1 => vec![3, 4, 6]; "one state one symbol")]
#[test_case(1, 2 => vec![6, 4]; "one state two symbols")]
#[test_case(2, 2 => vec![12, 12]; "two states two symbols")]
#[test_case(2, 3 => vec![18, 34, 58, 76]; "two states three symbols")]
#[test_case(3, 2 => vec![18, 34, 42]; "three states two symbols")]
fn round_bounds(states: u32, symbols: u32) -> Vec<u64> {
    let outcome = search(states, symbols).expect("search succeeds");
    outcome.rounds.iter().map(|round| round.upper_bound).collect()
}

#[test_case(2, 2, "1RB0RZ_0LB1LA", "...010..."; "two states two symbols")]
#[test_case(2, 3, "1RB2LB0RZ_2LA2RB1LB", "...222222202..."; "two states three symbols")]
#[test_case(3, 2, "1RB0RZ_1LB0RC_1LC1LA", "...10111..."; "three states two symbols")]
fn winning_machine(states: u32, symbols: u32, table: &str, tape: &str) {
    let outcome = search(states, symbols).expect("search succeeds");
    let best = outcome.best_machine.expect("a halting machine");

    assert_eq!(best.transitions().standard_format(states, symbols), table);
    assert_eq!(best.tape_string(), tape);
}

#[test]
fn two_by_two_dump() {
    let outcome = search(2, 2).expect("search succeeds");
    let best = outcome.best_machine.expect("a halting machine");

    assert_eq!(
        best.transitions().to_string(),
        "{(1, 0): (1, R, 2), (1, 1): (0, R, 0), (2, 0): (0, L, 2), (2, 1): (1, L, 1)}"
    );
}

#[test]
fn one_state_seed_leaves_the_class() {
    // The seed targets state 2 even when only state 1 is in the class
    let outcome = search(1, 2).expect("search succeeds");
    let best = outcome.best_machine.expect("a halting machine");

    assert!(best.transitions().iter().any(|(key, _)| key.state == 2));
    assert_eq!(best.transitions().standard_format(1, 2), "1RB---_0RZ---");
}
