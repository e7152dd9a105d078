// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutation algebra over the sheets {1..n}.
//!
//! - Permutation: bijections in one-line notation, composition, inverse
//! - Cycle: non-trivial orbits in canonical form
//! - SymmetricGroup: lexicographic listing and ranking of S_n
//!
//! The free functions mirror the methods and form the surface used by the
//! search and by callers reporting results.

pub mod cycle;
pub mod permutation;
pub mod symmetric;

pub use cycle::Cycle;
pub use permutation::Permutation;
pub use symmetric::SymmetricGroup;

use crate::error::Result;

/// `r(i) = a(b(i))`; fails with `DegreeMismatch` when degrees differ.
pub fn compose(a: &Permutation, b: &Permutation) -> Result<Permutation> {
    a.compose(b)
}

/// True iff `p` fixes every sheet.
pub fn is_identity(p: &Permutation) -> bool {
    p.is_identity()
}

/// Non-trivial cycles of `p`, ordered by smallest element.
pub fn cycles(p: &Permutation) -> Vec<Cycle> {
    p.cycles()
}

/// The inverse of `p`.
pub fn inverse(p: &Permutation) -> Permutation {
    p.inverse()
}
