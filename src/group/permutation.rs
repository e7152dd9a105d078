// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutations of the sheet labels {1..n}.
//!
//! A permutation is stored in one-line notation: position `i` (1-based) holds
//! the image of `i`. So `(2, 3, 1)` sends 1 → 2, 2 → 3 and 3 → 1.
//!
//! Composition applies the right operand first:
//! `compose(a, b)(i) = a(b(i))`.
//!
//! # Examples
//!
//! ```
//! use belyi_monodromy::group::Permutation;
//!
//! let rotate = Permutation::new(vec![2, 3, 1]).unwrap();
//! let swap = Permutation::new(vec![2, 1, 3]).unwrap();
//!
//! let r = rotate.compose(&swap).unwrap();
//! assert_eq!(r.images(), &[3, 2, 1]);
//! assert_eq!(format!("{}", rotate), "(2, 3, 1)");
//! assert_eq!(rotate.cycle_notation(), "(1 2 3)");
//! ```

use crate::error::{MonodromyError, Result};
use crate::group::Cycle;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A bijection of {1..n} in one-line notation.
///
/// The derived ordering is lexicographic on the one-line notation, which is
/// the canonical enumeration order of the symmetric group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Permutation {
    images: Vec<usize>,
}

impl Permutation {
    /// Create a permutation from its images, checking that every value in
    /// 1..=n occurs exactly once.
    pub fn new(images: Vec<usize>) -> Result<Self> {
        let n = images.len();
        let mut seen = vec![false; n];
        for &value in &images {
            if value == 0 || value > n {
                return Err(MonodromyError::InvalidPermutation {
                    reason: format!("value {} is outside 1..={}", value, n),
                });
            }
            if seen[value - 1] {
                return Err(MonodromyError::InvalidPermutation {
                    reason: format!("value {} occurs more than once", value),
                });
            }
            seen[value - 1] = true;
        }
        Ok(Self { images })
    }

    /// Caller guarantees `images` is a bijection of {1..n}.
    pub(crate) fn from_images_unchecked(images: Vec<usize>) -> Self {
        debug_assert!(Self::new(images.clone()).is_ok(), "not a permutation: {:?}", images);
        Self { images }
    }

    /// The identity permutation of degree `n`.
    pub fn identity(n: usize) -> Self {
        Self {
            images: (1..=n).collect(),
        }
    }

    /// Build a permutation of degree `n` from disjoint cycles.
    ///
    /// Elements not mentioned are fixed points.
    ///
    /// ```
    /// use belyi_monodromy::group::Permutation;
    ///
    /// let p = Permutation::from_cycles(4, &[vec![1, 3], vec![2, 4]]).unwrap();
    /// assert_eq!(p.images(), &[3, 4, 1, 2]);
    /// ```
    pub fn from_cycles(n: usize, cycles: &[Vec<usize>]) -> Result<Self> {
        let mut images: Vec<usize> = (1..=n).collect();
        let mut used = vec![false; n];
        for cycle in cycles {
            for (k, &from) in cycle.iter().enumerate() {
                if from == 0 || from > n {
                    return Err(MonodromyError::InvalidPermutation {
                        reason: format!("cycle element {} is outside 1..={}", from, n),
                    });
                }
                if used[from - 1] {
                    return Err(MonodromyError::InvalidPermutation {
                        reason: format!("cycles are not disjoint at {}", from),
                    });
                }
                used[from - 1] = true;
                images[from - 1] = cycle[(k + 1) % cycle.len()];
            }
        }
        Ok(Self { images })
    }

    /// Number of sheets permuted.
    pub fn degree(&self) -> usize {
        self.images.len()
    }

    /// One-line notation.
    pub fn images(&self) -> &[usize] {
        &self.images
    }

    /// Image of sheet `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in 1..=degree.
    pub fn apply(&self, i: usize) -> usize {
        assert!(
            i >= 1 && i <= self.degree(),
            "Sheet {} out of range for degree {}",
            i,
            self.degree()
        );
        self.images[i - 1]
    }

    /// Compose with `other`, applying `other` first: `r(i) = self(other(i))`.
    pub fn compose(&self, other: &Self) -> Result<Self> {
        if self.degree() != other.degree() {
            return Err(MonodromyError::DegreeMismatch {
                left: self.degree(),
                right: other.degree(),
            });
        }
        let images = other.images.iter().map(|&j| self.images[j - 1]).collect();
        Ok(Self { images })
    }

    /// The inverse permutation.
    pub fn inverse(&self) -> Self {
        let mut images = vec![0; self.degree()];
        for (i, &j) in self.images.iter().enumerate() {
            images[j - 1] = i + 1;
        }
        Self { images }
    }

    /// True iff every sheet is fixed.
    pub fn is_identity(&self) -> bool {
        self.images.iter().enumerate().all(|(i, &j)| j == i + 1)
    }

    /// Non-trivial cycles, ordered by smallest element.
    ///
    /// Each cycle starts from its smallest element and follows the
    /// permutation. Fixed points are omitted.
    pub fn cycles(&self) -> Vec<Cycle> {
        self.orbits()
            .into_iter()
            .filter(|orbit| orbit.len() > 1)
            .map(Cycle::from_orbit)
            .collect()
    }

    /// Orbit lengths including fixed points, largest first.
    ///
    /// This is the partition of the degree that labels the ramification over
    /// one branch point.
    pub fn cycle_type(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.orbits().iter().map(Vec::len).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        lengths
    }

    /// Cycle notation, `()` for the identity.
    pub fn cycle_notation(&self) -> String {
        let cycles = self.cycles();
        if cycles.is_empty() {
            return String::from("()");
        }
        cycles.iter().map(Cycle::to_string).collect()
    }

    /// All orbits in scan order, fixed points included.
    fn orbits(&self) -> Vec<Vec<usize>> {
        let n = self.degree();
        let mut visited = vec![false; n];
        let mut orbits = Vec::new();
        for start in 1..=n {
            if visited[start - 1] {
                continue;
            }
            let mut orbit = Vec::new();
            let mut j = start;
            while !visited[j - 1] {
                visited[j - 1] = true;
                orbit.push(j);
                j = self.images[j - 1];
            }
            orbits.push(orbit);
        }
        orbits
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.images.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

/// Parses one-line notation: `2,3,1`, `2 3 1` or `(2, 3, 1)`.
impl FromStr for Permutation {
    type Err = MonodromyError;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let images = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<usize>()
                    .map_err(|_| MonodromyError::InvalidPermutation {
                        reason: format!("'{}' is not a sheet number", token),
                    })
            })
            .collect::<Result<Vec<usize>>>()?;
        Self::new(images)
    }
}
