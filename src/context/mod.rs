// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure passed to every predicate:
//! - Tier 1 (MEMO): Immutable precomputed data, the lexicographic listing
//!   of S_n and the identity permutation
//! - Tier 2 (DYNAMIC): the sheet permutations currently chosen, the triples
//!   accepted so far and the search counters
//!
//! Each context serves exactly one degree.

use crate::group::{Permutation, SymmetricGroup};
use crate::monodromy::MonodromyTriple;
use crate::state::statistics::Statistics;
use crate::state::{SheetChoices, Slot};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Immutable precomputed data (Tier 1: MEMO).
///
/// Computed once when the context is created. The listing holds n!
/// permutations, which bounds the practical degree to single digits.
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// S_n in lexicographic order.
    pub group: SymmetricGroup,

    /// The identity of degree n.
    pub identity: Permutation,
}

impl MemoizedData {
    pub fn new(degree: usize) -> Self {
        let group = SymmetricGroup::new(degree);
        tracing::debug!(degree, order = group.order(), "listed symmetric group");
        Self {
            group,
            identity: Permutation::identity(degree),
        }
    }
}

/// Mutable search state (Tier 2: DYNAMIC).
#[derive(Debug, Default)]
pub struct DynamicState {
    /// Indices into the group listing for σ₀, σ₁, σ∞.
    pub sheets: SheetChoices,

    /// Accepted triples, in the order they were found.
    pub triples: Vec<MonodromyTriple>,

    /// Set once a choice predicate observes the cancellation flag.
    pub cancelled: bool,
}

/// Search context combining MEMO and DYNAMIC state.
///
/// ```text
/// SearchContext {
///     memo: MemoizedData,        // Tier 1: Immutable
///     state: DynamicState,       // Tier 2: Mutable, owned
///     statistics: Statistics,    // Tier 2: counters
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable precomputed data (Tier 1)
    pub memo: MemoizedData,
    /// Mutable search state (Tier 2)
    pub state: DynamicState,
    /// Counters incremented by counting predicates
    pub statistics: Statistics,
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchContext {
    /// Create a new search context for permutations of degree `degree`.
    pub fn new(degree: usize) -> Self {
        Self::with_memo(MemoizedData::new(degree))
    }

    /// Create a search context with existing MEMO data.
    pub fn with_memo(memo: MemoizedData) -> Self {
        Self {
            memo,
            state: DynamicState::default(),
            statistics: Statistics::new(),
            cancel: None,
        }
    }

    /// Attach a cancellation flag checked once per σ₀ choice.
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn degree(&self) -> usize {
        self.memo.group.degree()
    }

    /// True if the caller has raised the cancellation flag.
    pub fn cancel_requested(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Set the group element chosen for `slot`.
    pub fn choose(&mut self, slot: Slot, index: usize) {
        self.state.sheets.set(slot, index);
    }

    /// The permutation currently chosen for `slot`.
    pub fn sheet(&self, slot: Slot) -> &Permutation {
        self.memo.group.element(self.state.sheets.get(slot))
    }

    /// The currently chosen (σ₀, σ₁, σ∞).
    pub fn current_sheets(&self) -> (&Permutation, &Permutation, &Permutation) {
        (
            self.sheet(Slot::Zero),
            self.sheet(Slot::One),
            self.sheet(Slot::Infinity),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = SearchContext::new(3);
        assert_eq!(ctx.degree(), 3);
        assert_eq!(ctx.memo.group.order(), 6);
        assert!(ctx.memo.identity.is_identity());
        assert!(ctx.state.triples.is_empty());
        assert!(!ctx.cancel_requested());
    }

    #[test]
    fn test_choose_and_read_back() {
        let mut ctx = SearchContext::new(3);
        ctx.choose(Slot::Zero, 3);
        ctx.choose(Slot::Infinity, 5);
        let (s0, s1, sinf) = ctx.current_sheets();
        assert_eq!(s0.images(), &[2, 3, 1]);
        assert_eq!(s1.images(), &[1, 2, 3]);
        assert_eq!(sinf.images(), &[3, 2, 1]);
    }

    #[test]
    fn test_cancel_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let ctx = SearchContext::new(2).with_cancel_flag(flag.clone());
        assert!(!ctx.cancel_requested());
        flag.store(true, Ordering::Relaxed);
        assert!(ctx.cancel_requested());
    }
}
