//! Two-sided unbounded tape
//!
//! Stored as two growable halves indexed outward from the origin:
//! - right half holds positions 0, 1, 2, ...
//! - left half holds positions -1, -2, -3, ...
//!
//! Unwritten cells read as blank. The head moves one cell per step, so
//! writes land inside a half or exactly one past its end.

use super::{Symbol, BLANK};
use std::fmt;

/// Append-only two-sided tape
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tape {
    /// Cells at positions 0..
    right: Vec<Symbol>,

    /// Cells at positions -1, -2, ...
    left: Vec<Symbol>,
}

impl Tape {
    /// Create blank tape
    pub fn new() -> Self {
        Self::default()
    }

    /// Read symbol at position (blank if never written)
    pub fn read(&self, position: i64) -> Symbol {
        let (half, index) = self.half(position);
        half.get(index).copied().unwrap_or(BLANK)
    }

    /// Write symbol at position
    ///
    /// # Panics
    ///
    /// Panics if `position` lies more than one cell past the allocated end
    /// of its half. Head moves are ±1, so this means corrupted machine state.
    pub fn write(&mut self, position: i64, symbol: Symbol) {
        let (half, index) = self.half_mut(position);
        match index.cmp(&half.len()) {
            std::cmp::Ordering::Less => half[index] = symbol,
            std::cmp::Ordering::Equal => half.push(symbol),
            std::cmp::Ordering::Greater => panic!(
                "tape write at {position} skips past allocated end ({} cells on that side)",
                half.len()
            ),
        }
    }

    /// Number of allocated cells on both halves
    pub fn allocated(&self) -> usize {
        self.right.len() + self.left.len()
    }

    /// Inclusive bounds of the allocated region
    pub fn bounds(&self) -> Option<(i64, i64)> {
        if self.allocated() == 0 {
            return None;
        }

        let min_pos = if self.left.is_empty() {
            0
        } else {
            -(self.left.len() as i64)
        };
        let max_pos = self.right.len() as i64 - 1;
        Some((min_pos, max_pos.max(min_pos)))
    }

    fn half(&self, position: i64) -> (&Vec<Symbol>, usize) {
        if position >= 0 {
            (&self.right, position as usize)
        } else {
            (&self.left, (-(position + 1)) as usize)
        }
    }

    fn half_mut(&mut self, position: i64) -> (&mut Vec<Symbol>, usize) {
        if position >= 0 {
            (&mut self.right, position as usize)
        } else {
            (&mut self.left, (-(position + 1)) as usize)
        }
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.left.iter().rev().chain(self.right.iter()) {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
