// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end tests of the monodromy search.

mod common;

use belyi_monodromy::{
    is_monodromy, search, search_with, MonodromyError, MonodromyTriple, SearchOptions,
    SearchStrategy,
};
use common::{brute_force_count, perm, triple};
use std::collections::HashSet;

#[test]
fn test_degree_two_exact_order() {
    let triples = search(2).unwrap();
    let expected = vec![
        triple(&[1, 2], &[1, 2], &[1, 2]),
        triple(&[1, 2], &[2, 1], &[2, 1]),
        triple(&[2, 1], &[1, 2], &[2, 1]),
        triple(&[2, 1], &[2, 1], &[1, 2]),
    ];
    assert_eq!(triples, expected);
}

#[test]
fn test_degree_three_every_triple_validates() {
    let triples = search(3).unwrap();
    assert!(!triples.is_empty());
    for t in &triples {
        assert_eq!(t.degree(), 3);
        assert!(is_monodromy(t.sigma_0(), t.sigma_1(), t.sigma_inf()).unwrap());
    }
}

#[test]
fn test_degree_three_matches_brute_force() {
    let triples = search(3).unwrap();
    assert_eq!(triples.len(), brute_force_count(3));
    assert_eq!(triples.len(), 36);

    let distinct: HashSet<&MonodromyTriple> = triples.iter().collect();
    assert_eq!(distinct.len(), triples.len());
}

#[test]
fn test_count_is_n_factorial_squared() {
    // σ∞ is determined by σ₀ and σ₁
    assert_eq!(search(1).unwrap().len(), 1);
    assert_eq!(search(2).unwrap().len(), 4);
    assert_eq!(search(3).unwrap().len(), 36);
}

#[test]
fn test_results_are_lexicographic() {
    let triples = search(3).unwrap();
    let keys: Vec<_> = triples
        .iter()
        .map(|t| (t.sigma_0().clone(), t.sigma_1().clone(), t.sigma_inf().clone()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    assert!(triples[0].sigma_0().is_identity());
    assert!(triples[0].sigma_1().is_identity());
    assert_eq!(triples[1].sigma_1(), &perm(&[1, 3, 2]));
}

#[test]
fn test_search_is_deterministic() {
    assert_eq!(search(3).unwrap(), search(3).unwrap());
}

#[test]
fn test_degree_zero_rejected() {
    assert_eq!(
        search(0),
        Err(MonodromyError::InvalidDegree { degree: 0 })
    );
}

#[test]
fn test_strategies_agree_on_degree_three() {
    let exhaustive = search_with(3, &SearchOptions::default()).unwrap();
    let eliminated = search_with(
        3,
        &SearchOptions::default().with_strategy(SearchStrategy::InverseElimination),
    )
    .unwrap();
    assert_eq!(exhaustive.triples, eliminated.triples);
    assert_eq!(exhaustive.candidates, 216);
    assert_eq!(eliminated.candidates, 36);
}

#[test]
fn test_inverse_elimination_degree_four() {
    let report = search_with(
        4,
        &SearchOptions::default().with_strategy(SearchStrategy::InverseElimination),
    )
    .unwrap();
    assert_eq!(report.triples.len(), 576);
    assert_eq!(report.candidates, 576);
    assert!(report
        .triples
        .iter()
        .all(|t| is_monodromy(t.sigma_0(), t.sigma_1(), t.sigma_inf()).unwrap()));
}

#[test]
fn test_limit_returns_prefix() {
    let all = search(3).unwrap();
    let report = search_with(3, &SearchOptions::default().with_limit(5)).unwrap();
    assert_eq!(report.triples, all[..5]);
}

#[test]
fn test_report_serializes() {
    let report = search_with(2, &SearchOptions::default()).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["degree"], 2);
    assert_eq!(value["strategy"], "exhaustive");
    assert_eq!(value["triples"].as_array().unwrap().len(), 4);
    assert_eq!(value["triples"][1]["sigma_1"], serde_json::json!([2, 1]));
}
