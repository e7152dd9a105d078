// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates that choose the sheet permutations σ₀, σ₁, σ∞.
//!
//! `ChooseSheetPredicate` offers every element of S_n, in lexicographic
//! order, for one slot. Three of them in a row enumerate S_n × S_n × S_n with
//! σ₀ outermost and σ∞ innermost.
//!
//! `CloseTriplePredicate` replaces the innermost choice: given σ₀ and σ₁ there
//! is exactly one σ∞ = (σ₀σ₁)⁻¹ that can pass validation, so it is computed
//! instead of searched for. The accepted triples and their order are the same.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Slot;

/// Chooses the permutation for one slot among all of S_n.
///
/// When choosing σ₀ it also checks the cancellation flag, once per σ₀.
#[derive(Debug)]
pub struct ChooseSheetPredicate {
    slot: Slot,
}

impl ChooseSheetPredicate {
    pub fn new(slot: Slot) -> Self {
        Self { slot }
    }
}

impl Predicate for ChooseSheetPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Choices(ctx.memo.group.order())
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        if self.slot == Slot::Zero && (ctx.state.cancelled || ctx.cancel_requested()) {
            ctx.state.cancelled = true;
            return PredicateResult::Failure;
        }
        ctx.choose(self.slot, choice);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        match self.slot {
            Slot::Zero => "ChooseSigma0",
            Slot::One => "ChooseSigma1",
            Slot::Infinity => "ChooseSigmaInf",
        }
    }
}

/// Sets σ∞ to the inverse of σ₀σ₁.
#[derive(Debug)]
pub struct CloseTriplePredicate;

impl Predicate for CloseTriplePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let Ok(product) = ctx.sheet(Slot::Zero).compose(ctx.sheet(Slot::One)) else {
            return PredicateResult::Failure;
        };
        match ctx.memo.group.rank(&product.inverse()) {
            Some(index) => {
                ctx.choose(Slot::Infinity, index);
                PredicateResult::Success
            }
            None => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "CloseTriple"
    }
}
