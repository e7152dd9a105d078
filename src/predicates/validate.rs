// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validate-then-collect.
//!
//! `MonodromyPredicate` fails unless the current triple multiplies to the
//! identity; `CollectPredicate` then records it. A rejected candidate is
//! simply backtracked over.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::monodromy::{is_monodromy, MonodromyTriple};

/// Succeeds iff `compose(compose(σ₀, σ₁), σ∞)` is the identity.
#[derive(Debug)]
pub struct MonodromyPredicate;

impl Predicate for MonodromyPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let (sigma_0, sigma_1, sigma_inf) = ctx.current_sheets();
        match is_monodromy(sigma_0, sigma_1, sigma_inf) {
            Ok(true) => PredicateResult::Success,
            Ok(false) | Err(_) => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "Monodromy"
    }
}

/// Appends the current (validated) triple to the results.
#[derive(Debug)]
pub struct CollectPredicate;

impl Predicate for CollectPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let (sigma_0, sigma_1, sigma_inf) = ctx.current_sheets();
        let triple =
            MonodromyTriple::from_validated(sigma_0.clone(), sigma_1.clone(), sigma_inf.clone());
        ctx.state.triples.push(triple);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Collect"
    }
}
