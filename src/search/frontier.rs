//! Live machine frontier
//!
//! Machines are keyed by identity. Identities are handed out in increasing
//! order, so iterating the map visits machines in discovery order.
//! A FIFO schedule holds the identities still to be simulated this round.

use crate::machine::{MachineId, TuringMachine};
use std::collections::{BTreeMap, VecDeque};

/// Machines that have neither halted nor hit an undefined transition
#[derive(Debug, Default)]
pub struct Frontier {
    /// Live machines by identity
    machines: BTreeMap<MachineId, TuringMachine>,

    /// Identities awaiting simulation in the current round
    schedule: VecDeque<MachineId>,
}

impl Frontier {
    /// Create empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a machine and schedule it for the current round
    pub fn push(&mut self, machine: TuringMachine) {
        self.schedule.push_back(machine.id());
        self.machines.insert(machine.id(), machine);
    }

    /// Return a machine to the frontier without rescheduling it
    pub fn park(&mut self, machine: TuringMachine) {
        self.machines.insert(machine.id(), machine);
    }

    /// Schedule every live machine, in identity order
    pub fn schedule_all(&mut self) {
        self.schedule.clear();
        self.schedule.extend(self.machines.keys().copied());
    }

    /// Take the next scheduled machine out of the frontier
    ///
    /// The caller either drops it (halted or branched) or hands it back
    /// through [`Frontier::park`].
    pub fn take_next(&mut self) -> Option<TuringMachine> {
        while let Some(id) = self.schedule.pop_front() {
            if let Some(machine) = self.machines.remove(&id) {
                return Some(machine);
            }
        }
        None
    }

    /// Number of live machines
    pub fn len(&self) -> usize {
        self.machines.len()
    }

    /// Whether no machine is live
    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    /// Number of machines still scheduled this round
    pub fn pending(&self) -> usize {
        self.schedule.len()
    }

    /// Iterate live machines in identity order
    pub fn iter(&self) -> impl Iterator<Item = &TuringMachine> + '_ {
        self.machines.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(id: MachineId) -> TuringMachine {
        TuringMachine::builder().id(id).build()
    }

    #[test]
    fn test_fifo_schedule() {
        let mut frontier = Frontier::new();
        frontier.push(machine(3));
        frontier.push(machine(1));

        assert_eq!(frontier.take_next().map(|m| m.id()), Some(3));
        frontier.push(machine(5));
        assert_eq!(frontier.take_next().map(|m| m.id()), Some(1));
        assert_eq!(frontier.take_next().map(|m| m.id()), Some(5));
        assert!(frontier.take_next().is_none());
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_parked_machines_wait_for_next_round() {
        let mut frontier = Frontier::new();
        frontier.push(machine(2));
        frontier.push(machine(4));

        let first = frontier.take_next().expect("scheduled");
        frontier.park(first);
        assert_eq!(frontier.take_next().map(|m| m.id()), Some(4));
        assert!(frontier.take_next().is_none());
        assert_eq!(frontier.len(), 1);

        frontier.park(machine(1));
        frontier.schedule_all();
        assert_eq!(frontier.pending(), 2);
        assert_eq!(frontier.take_next().map(|m| m.id()), Some(1));
        assert_eq!(frontier.take_next().map(|m| m.id()), Some(2));
    }
}
