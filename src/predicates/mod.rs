// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! # Organization
//!
//! - `sheets`: choice predicates for σ₀, σ₁, σ∞ and the σ∞ shortcut
//! - `validate`: the identity-product check and result collection
//! - Built-in terminal predicates: `FailPredicate`, `SuspendPredicate`,
//!   `LimitPredicate`

pub mod sheets;
pub mod validate;

pub use sheets::{ChooseSheetPredicate, CloseTriplePredicate};
pub use validate::{CollectPredicate, MonodromyPredicate};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Always fails, forcing backtracking into the previous choice. Ending a
/// program with it makes the engine visit every candidate.
///
/// # Example
///
/// ```
/// use belyi_monodromy::context::SearchContext;
/// use belyi_monodromy::engine::EngineBuilder;
/// use belyi_monodromy::predicates::{ChooseSheetPredicate, FailPredicate};
/// use belyi_monodromy::state::Slot;
///
/// let mut ctx = SearchContext::new(3);
/// let engine = EngineBuilder::new()
///     .add(Box::new(ChooseSheetPredicate::new(Slot::Zero)))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all six choices then fail
/// assert!(engine.search(&mut ctx).is_none());
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate: hands control back to the caller at the first
/// path that reaches it.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}

/// Fails until `limit` triples have been collected, then suspends.
#[derive(Debug)]
pub struct LimitPredicate {
    limit: usize,
}

impl LimitPredicate {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Predicate for LimitPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if ctx.state.triples.len() >= self.limit {
            PredicateResult::Suspend
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "Limit"
    }
}

impl TerminalPredicate for LimitPredicate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_predicate() {
        let mut ctx = SearchContext::new(2);
        let mut pred = LimitPredicate::new(1);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(CollectPredicate.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Suspend);
    }
}
