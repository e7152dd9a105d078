// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The symmetric group S_n in lexicographic order.
//!
//! The listing is the canonical enumeration that fixes the output order of the
//! monodromy search, so "the first k triples" is reproducible.
//!
//! # Examples
//!
//! ```
//! use belyi_monodromy::group::{Permutation, SymmetricGroup};
//!
//! let s3 = SymmetricGroup::new(3);
//! assert_eq!(s3.order(), 6);
//! assert_eq!(s3.element(0).images(), &[1, 2, 3]);
//! assert_eq!(s3.element(5).images(), &[3, 2, 1]);
//!
//! let p = Permutation::new(vec![2, 3, 1]).unwrap();
//! assert_eq!(s3.rank(&p), Some(3));
//! ```

use crate::group::Permutation;

/// All n! permutations of {1..n}, listed lexicographically.
#[derive(Debug, Clone)]
pub struct SymmetricGroup {
    degree: usize,
    elements: Vec<Permutation>,
    /// `factorials[k] = k!` for k in 0..degree.
    factorials: Vec<usize>,
}

impl SymmetricGroup {
    /// List S_n. Degree 0 yields the single empty permutation.
    pub fn new(degree: usize) -> Self {
        let mut elements = Vec::new();
        let mut current: Vec<usize> = (1..=degree).collect();
        loop {
            elements.push(Permutation::from_images_unchecked(current.clone()));
            if !next_permutation(&mut current) {
                break;
            }
        }

        let mut factorials = Vec::with_capacity(degree.max(1));
        factorials.push(1);
        for k in 1..degree {
            factorials.push(factorials[k - 1] * k);
        }

        Self {
            degree,
            elements,
            factorials,
        }
    }

    /// Degree n of the permuted set.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of elements, n!.
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// All elements in lexicographic order.
    pub fn elements(&self) -> &[Permutation] {
        &self.elements
    }

    /// Element at lexicographic position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= order()`.
    pub fn element(&self, index: usize) -> &Permutation {
        &self.elements[index]
    }

    /// Lexicographic position of `p` (its Lehmer-code rank), or `None` if `p`
    /// has a different degree.
    pub fn rank(&self, p: &Permutation) -> Option<usize> {
        if p.degree() != self.degree {
            return None;
        }
        let images = p.images();
        let n = self.degree;
        let mut rank = 0;
        for i in 0..n {
            let smaller_after = images[i + 1..].iter().filter(|&&v| v < images[i]).count();
            rank += smaller_after * self.factorials[n - 1 - i];
        }
        Some(rank)
    }
}

/// Advance `values` to the next permutation in lexicographic order.
///
/// Returns false (leaving `values` untouched) when it is already the last one.
fn next_permutation(values: &mut [usize]) -> bool {
    if values.len() < 2 {
        return false;
    }
    // Longest non-increasing suffix starts at `pivot + 1`
    let mut pivot = values.len() - 1;
    while pivot > 0 && values[pivot - 1] >= values[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    let pivot = pivot - 1;
    let mut successor = values.len() - 1;
    while values[successor] <= values[pivot] {
        successor -= 1;
    }
    values.swap(pivot, successor);
    values[pivot + 1..].reverse();
    true
}
