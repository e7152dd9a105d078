// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state.
//!
//! - `SheetChoices`: which element of S_n is currently chosen for each of
//!   σ₀, σ₁, σ∞
//! - `statistics`: search counters

pub mod statistics;

use std::fmt;

/// One of the three branch points 0, 1, ∞ over which a monodromy
/// permutation is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Zero,
    One,
    Infinity,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Zero, Slot::One, Slot::Infinity];

    fn index(self) -> usize {
        match self {
            Slot::Zero => 0,
            Slot::One => 1,
            Slot::Infinity => 2,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Zero => write!(f, "σ₀"),
            Slot::One => write!(f, "σ₁"),
            Slot::Infinity => write!(f, "σ∞"),
        }
    }
}

/// Lexicographic indices of the chosen σ₀, σ₁, σ∞.
///
/// All start at 0, the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SheetChoices([usize; 3]);

impl SheetChoices {
    pub fn get(&self, slot: Slot) -> usize {
        self.0[slot.index()]
    }

    pub fn set(&mut self, slot: Slot, index: usize) {
        self.0[slot.index()] = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_choices() {
        let mut choices = SheetChoices::default();
        assert_eq!(choices.get(Slot::One), 0);
        choices.set(Slot::One, 4);
        assert_eq!(choices.get(Slot::One), 4);
        assert_eq!(choices.get(Slot::Zero), 0);
        assert_eq!(choices.get(Slot::Infinity), 0);
    }

    #[test]
    fn test_slot_display() {
        let names: Vec<String> = Slot::ALL.iter().map(Slot::to_string).collect();
        assert_eq!(names, vec!["σ₀", "σ₁", "σ∞"]);
    }
}
