// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cycle type for non-trivial orbits of a permutation.
//!
//! A cycle is a cyclic sequence of sheets: `(1 3 2)` means 1 → 3 → 2 → 1.
//! Cycles have rotation equivalence, `(1 3 2) = (3 2 1) = (2 1 3)`, and are
//! stored in canonical form starting from the smallest sheet.
//!
//! # Examples
//!
//! ```
//! use belyi_monodromy::group::Cycle;
//!
//! let cycle = Cycle::new(&[3, 2, 1]);
//! assert_eq!(cycle.elements(), &[1, 3, 2]);
//! assert_eq!(format!("{}", cycle), "(1 3 2)");
//! ```

use serde::Serialize;
use std::fmt;

/// A non-trivial orbit, listed from its smallest element in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cycle {
    elements: Vec<usize>,
}

impl Cycle {
    /// Create a cycle from a sequence of sheets, rotating it to start with the
    /// smallest sheet.
    ///
    /// # Panics
    ///
    /// Panics if the sequence has fewer than 2 sheets.
    pub fn new(elements: &[usize]) -> Self {
        assert!(
            elements.len() >= 2,
            "Cycle must have at least 2 elements, got {}",
            elements.len()
        );
        let min_pos = elements
            .iter()
            .enumerate()
            .min_by_key(|(_, &e)| e)
            .map_or(0, |(pos, _)| pos);
        let mut rotated = Vec::with_capacity(elements.len());
        rotated.extend_from_slice(&elements[min_pos..]);
        rotated.extend_from_slice(&elements[..min_pos]);
        Self { elements: rotated }
    }

    /// An orbit produced by scanning sheets in increasing order already
    /// starts at its smallest element.
    pub(crate) fn from_orbit(elements: Vec<usize>) -> Self {
        debug_assert!(elements.len() >= 2);
        debug_assert!(elements.iter().all(|&e| e >= elements[0]));
        Self { elements }
    }

    /// Number of sheets in this cycle.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false: a cycle has at least 2 sheets.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Sheets in cyclic order, starting from the smallest.
    pub fn elements(&self) -> &[usize] {
        &self.elements
    }

    /// Smallest sheet in the cycle.
    pub fn smallest(&self) -> usize {
        self.elements[0]
    }

    /// True if `sheet` lies on this cycle.
    pub fn contains(&self, sheet: usize) -> bool {
        self.elements.contains(&sheet)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, sheet) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", sheet)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_rotation() {
        assert_eq!(Cycle::new(&[4, 6, 5]).elements(), &[4, 6, 5]);
        assert_eq!(Cycle::new(&[6, 5, 4]).elements(), &[4, 6, 5]);
        assert_eq!(Cycle::new(&[5, 4, 6]).elements(), &[4, 6, 5]);
    }

    #[test]
    fn test_accessors() {
        let cycle = Cycle::new(&[2, 5]);
        assert_eq!(cycle.len(), 2);
        assert!(!cycle.is_empty());
        assert_eq!(cycle.smallest(), 2);
        assert!(cycle.contains(5));
        assert!(!cycle.contains(1));
        assert_eq!(cycle.to_string(), "(2 5)");
    }

    #[test]
    #[should_panic(expected = "at least 2 elements")]
    fn test_fixed_point_is_not_a_cycle() {
        let _ = Cycle::new(&[1]);
    }
}
