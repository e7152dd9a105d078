// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use belyi_monodromy::{compose, is_identity, MonodromyTriple, Permutation, SymmetricGroup};

/// Parse one-line notation, panicking on bad input.
pub fn perm(images: &[usize]) -> Permutation {
    Permutation::new(images.to_vec()).unwrap()
}

/// A triple from three one-line notations.
pub fn triple(s0: &[usize], s1: &[usize], sinf: &[usize]) -> MonodromyTriple {
    MonodromyTriple::try_new(perm(s0), perm(s1), perm(sinf)).unwrap()
}

/// The triple (id, σ₁, σ₁⁻¹).
pub fn triple_with_sigma_1(sigma_1: Permutation) -> MonodromyTriple {
    let inverse = sigma_1.inverse();
    MonodromyTriple::try_new(Permutation::identity(sigma_1.degree()), sigma_1, inverse).unwrap()
}

/// Count valid triples by three nested loops over S_n, without the engine.
pub fn brute_force_count(degree: usize) -> usize {
    let group = SymmetricGroup::new(degree);
    let mut count = 0;
    for s0 in group.elements() {
        for s1 in group.elements() {
            let product = compose(s0, s1).unwrap();
            for sinf in group.elements() {
                if is_identity(&compose(&product, sinf).unwrap()) {
                    count += 1;
                }
            }
        }
    }
    count
}

/// The n-cycle 1 → 2 → ... → n → 1.
pub fn rotation(degree: usize) -> Permutation {
    let images: Vec<usize> = (1..=degree).map(|i| i % degree + 1).collect();
    Permutation::new(images).unwrap()
}
