// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Monodromy triples (σ₀, σ₁, σ∞) with σ₀·σ₁·σ∞ = 1.
//!
//! The product is taken left to right as written, using right-to-left
//! composition: `compose(compose(σ₀, σ₁), σ∞)`, so σ∞ acts first.
//!
//! # Examples
//!
//! ```
//! use belyi_monodromy::group::Permutation;
//! use belyi_monodromy::monodromy::MonodromyTriple;
//!
//! let swap = Permutation::new(vec![2, 1]).unwrap();
//! let id = Permutation::identity(2);
//!
//! let triple = MonodromyTriple::try_new(swap.clone(), id.clone(), swap.clone()).unwrap();
//! assert_eq!(triple.degree(), 2);
//! assert!(MonodromyTriple::try_new(swap, id.clone(), id).is_err());
//! ```

use crate::error::{MonodromyError, Result};
use crate::group::Permutation;
use serde::Serialize;
use std::fmt;

/// True iff `compose(compose(σ₀, σ₁), σ∞)` is the identity.
///
/// Fails with `DegreeMismatch` if the degrees differ.
pub fn is_monodromy(
    sigma_0: &Permutation,
    sigma_1: &Permutation,
    sigma_inf: &Permutation,
) -> Result<bool> {
    Ok(sigma_0.compose(sigma_1)?.compose(sigma_inf)?.is_identity())
}

/// Three permutations of one degree whose ordered product is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MonodromyTriple {
    sigma_0: Permutation,
    sigma_1: Permutation,
    sigma_inf: Permutation,
}

impl MonodromyTriple {
    /// Validate and wrap a triple.
    pub fn try_new(
        sigma_0: Permutation,
        sigma_1: Permutation,
        sigma_inf: Permutation,
    ) -> Result<Self> {
        if !is_monodromy(&sigma_0, &sigma_1, &sigma_inf)? {
            return Err(MonodromyError::NotMonodromy);
        }
        Ok(Self {
            sigma_0,
            sigma_1,
            sigma_inf,
        })
    }

    /// Caller has already run `is_monodromy` on these.
    pub(crate) fn from_validated(
        sigma_0: Permutation,
        sigma_1: Permutation,
        sigma_inf: Permutation,
    ) -> Self {
        debug_assert!(matches!(
            is_monodromy(&sigma_0, &sigma_1, &sigma_inf),
            Ok(true)
        ));
        Self {
            sigma_0,
            sigma_1,
            sigma_inf,
        }
    }

    pub fn degree(&self) -> usize {
        self.sigma_0.degree()
    }

    /// Monodromy around 0.
    pub fn sigma_0(&self) -> &Permutation {
        &self.sigma_0
    }

    /// Monodromy around 1.
    pub fn sigma_1(&self) -> &Permutation {
        &self.sigma_1
    }

    /// Monodromy around ∞.
    pub fn sigma_inf(&self) -> &Permutation {
        &self.sigma_inf
    }

    /// Cycle types over 0, 1 and ∞.
    pub fn passport(&self) -> Passport {
        Passport {
            zero: self.sigma_0.cycle_type(),
            one: self.sigma_1.cycle_type(),
            infinity: self.sigma_inf.cycle_type(),
        }
    }
}

impl fmt::Display for MonodromyTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "σ₀ = {}, σ₁ = {}, σ∞ = {}",
            self.sigma_0, self.sigma_1, self.sigma_inf
        )
    }
}

/// The ramification profile of a triple: one partition of the degree per
/// branch point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Passport {
    pub zero: Vec<usize>,
    pub one: Vec<usize>,
    pub infinity: Vec<usize>,
}

impl fmt::Display for Passport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}, {:?}]", self.zero, self.one, self.infinity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(images: &[usize]) -> Permutation {
        Permutation::new(images.to_vec()).unwrap()
    }

    #[test]
    fn test_is_monodromy() {
        let rotate = perm(&[2, 3, 1]);
        // σ∞ must be the inverse of σ₀σ₁
        assert!(is_monodromy(&rotate, &Permutation::identity(3), &rotate.inverse()).unwrap());
        assert!(!is_monodromy(&rotate, &Permutation::identity(3), &rotate).unwrap());
    }

    #[test]
    fn test_three_rotations_multiply_to_identity() {
        let rotate = perm(&[2, 3, 1]);
        assert!(is_monodromy(&rotate, &rotate, &rotate).unwrap());
    }

    #[test]
    fn test_is_monodromy_degree_mismatch() {
        let err = is_monodromy(&perm(&[1, 2]), &perm(&[1, 2, 3]), &perm(&[1, 2])).unwrap_err();
        assert_eq!(err, MonodromyError::DegreeMismatch { left: 2, right: 3 });
    }

    #[test]
    fn test_try_new_rejects_non_identity_product() {
        let swap = perm(&[2, 1, 3]);
        let id = Permutation::identity(3);
        assert_eq!(
            MonodromyTriple::try_new(swap, id.clone(), id),
            Err(MonodromyError::NotMonodromy)
        );
    }

    #[test]
    fn test_passport() {
        let transposition = perm(&[2, 1, 3]);
        let rotate = perm(&[2, 3, 1]);
        let sigma_inf = transposition.compose(&rotate).unwrap().inverse();
        let triple = MonodromyTriple::try_new(transposition, rotate, sigma_inf).unwrap();
        let passport = triple.passport();
        assert_eq!(passport.zero, vec![2, 1]);
        assert_eq!(passport.one, vec![3]);
        assert_eq!(passport.infinity, vec![2, 1]);
        assert_eq!(passport.to_string(), "[[2, 1], [3], [2, 1]]");
    }

    #[test]
    fn test_display() {
        let id = Permutation::identity(2);
        let triple = MonodromyTriple::try_new(id.clone(), id.clone(), id).unwrap();
        assert_eq!(triple.to_string(), "σ₀ = (1, 2), σ₁ = (1, 2), σ∞ = (1, 2)");
    }
}
