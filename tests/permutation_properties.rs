// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Group laws of S_n, checked on random permutations.

use belyi_monodromy::{compose, cycles, inverse, is_identity, MonodromyError, Permutation};
use proptest::prelude::*;

fn permutation_of(degree: usize) -> impl Strategy<Value = Permutation> {
    Just((1..=degree).collect::<Vec<usize>>())
        .prop_shuffle()
        .prop_map(|images| Permutation::new(images).unwrap())
}

fn triple_of_same_degree() -> impl Strategy<Value = (Permutation, Permutation, Permutation)> {
    (1usize..=7).prop_flat_map(|n| (permutation_of(n), permutation_of(n), permutation_of(n)))
}

proptest! {
    #[test]
    fn composition_is_associative((a, b, c) in triple_of_same_degree()) {
        let left = compose(&compose(&a, &b).unwrap(), &c).unwrap();
        let right = compose(&a, &compose(&b, &c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn identity_is_neutral(p in (1usize..=8).prop_flat_map(permutation_of)) {
        let id = Permutation::identity(p.degree());
        prop_assert_eq!(&compose(&id, &p).unwrap(), &p);
        prop_assert_eq!(&compose(&p, &id).unwrap(), &p);
    }

    #[test]
    fn inverse_cancels(p in (1usize..=8).prop_flat_map(permutation_of)) {
        prop_assert!(is_identity(&compose(&p, &inverse(&p)).unwrap()));
        prop_assert!(is_identity(&compose(&inverse(&p), &p).unwrap()));
    }

    #[test]
    fn composition_applies_right_operand_first((a, b, _c) in triple_of_same_degree()) {
        let r = compose(&a, &b).unwrap();
        for i in 1..=a.degree() {
            prop_assert_eq!(r.apply(i), a.apply(b.apply(i)));
        }
    }

    #[test]
    fn cycles_rebuild_the_permutation(p in (1usize..=8).prop_flat_map(permutation_of)) {
        let decomposition = cycles(&p);
        let as_lists: Vec<Vec<usize>> =
            decomposition.iter().map(|c| c.elements().to_vec()).collect();
        prop_assert_eq!(&Permutation::from_cycles(p.degree(), &as_lists).unwrap(), &p);
    }

    #[test]
    fn cycles_are_canonical(p in (1usize..=8).prop_flat_map(permutation_of)) {
        let decomposition = cycles(&p);
        let starts: Vec<usize> = decomposition.iter().map(|c| c.smallest()).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&starts, &sorted);
        for cycle in &decomposition {
            prop_assert!(cycle.len() >= 2);
            prop_assert_eq!(cycle.elements()[0], cycle.smallest());
            for pair in cycle.elements().windows(2) {
                prop_assert_eq!(p.apply(pair[0]), pair[1]);
            }
        }
        let moved = (1..=p.degree()).filter(|&i| p.apply(i) != i).count();
        let covered: usize = decomposition.iter().map(|c| c.len()).sum();
        prop_assert_eq!(moved, covered);
    }

    #[test]
    fn cycle_type_sums_to_degree(p in (1usize..=8).prop_flat_map(permutation_of)) {
        prop_assert_eq!(p.cycle_type().iter().sum::<usize>(), p.degree());
    }

    #[test]
    fn display_parses_back(p in (1usize..=8).prop_flat_map(permutation_of)) {
        let parsed: Permutation = p.to_string().parse().unwrap();
        prop_assert_eq!(parsed, p);
    }
}

#[test]
fn test_identity_has_no_cycles() {
    for n in 1..=6 {
        assert!(cycles(&Permutation::identity(n)).is_empty());
    }
}

#[test]
fn test_compose_degree_mismatch() {
    let a = Permutation::identity(2);
    let b = Permutation::identity(3);
    assert_eq!(
        compose(&a, &b),
        Err(MonodromyError::DegreeMismatch { left: 2, right: 3 })
    );
}

#[test]
fn test_known_composition() {
    let a = Permutation::new(vec![2, 3, 1]).unwrap();
    let b = Permutation::new(vec![3, 2, 1]).unwrap();
    // a(b(1)) = a(3) = 1, a(b(2)) = a(2) = 3, a(b(3)) = a(1) = 2
    assert_eq!(compose(&a, &b).unwrap().images(), &[1, 3, 2]);
}
