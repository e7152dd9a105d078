// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search for monodromy triples of a given degree.
//!
//! The search is a predicate program run by the engine:
//!
//! ```text
//! ChooseSheet(σ₀) → ChooseSheet(σ₁) → ChooseSheet(σ∞) | CloseTriple
//!     → count candidate → Monodromy → count triple → Collect → Fail | Limit
//! ```
//!
//! Choices are explored depth-first in the lexicographic order of S_n, so the
//! triples come out with σ₀ as the most significant key and σ∞ as the least.
//! Both strategies produce the same triples in the same order; elimination
//! only skips candidates that cannot pass validation.

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, TerminatedProgram};
use crate::error::{MonodromyError, Result};
use crate::monodromy::MonodromyTriple;
use crate::predicates::{
    ChooseSheetPredicate, CloseTriplePredicate, CollectPredicate, FailPredicate, LimitPredicate,
    MonodromyPredicate,
};
use crate::state::statistics::{Counters, Statistics};
use crate::state::Slot;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// How candidate triples are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// All of S_n × S_n × S_n: (n!)³ candidates.
    #[default]
    Exhaustive,
    /// σ∞ computed as (σ₀σ₁)⁻¹: (n!)² candidates.
    InverseElimination,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::Exhaustive => write!(f, "exhaustive"),
            SearchStrategy::InverseElimination => write!(f, "inverse-elimination"),
        }
    }
}

/// Options for [`search_with`].
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub strategy: SearchStrategy,
    /// Stop after this many triples; they are the first ones in canonical order.
    pub limit: Option<usize>,
    /// Checked once per σ₀; when raised the search fails with `Cancelled`.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SearchOptions {
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Triples found by one search, with the work it took.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub degree: usize,
    pub strategy: SearchStrategy,
    pub triples: Vec<MonodromyTriple>,
    /// Candidates handed to validation.
    pub candidates: u64,
    /// Engine try_pred / retry_pred calls.
    pub tries: u64,
    pub retries: u64,
}

/// All monodromy triples of degree `degree`, in canonical order.
///
/// Degree 0 is rejected with `InvalidDegree`.
///
/// ```
/// use belyi_monodromy::search;
///
/// let triples = search(3).unwrap();
/// assert_eq!(triples.len(), 36);
/// ```
pub fn search(degree: usize) -> Result<Vec<MonodromyTriple>> {
    search_with(degree, &SearchOptions::default()).map(|report| report.triples)
}

/// Run a search with explicit options.
pub fn search_with(degree: usize, options: &SearchOptions) -> Result<SearchReport> {
    if degree < 1 {
        return Err(MonodromyError::InvalidDegree { degree });
    }

    let mut ctx = SearchContext::new(degree);
    if let Some(cancel) = &options.cancel {
        ctx = ctx.with_cancel_flag(cancel.clone());
    }

    tracing::debug!(
        degree,
        order = ctx.memo.group.order(),
        strategy = %options.strategy,
        limit = ?options.limit,
        "starting monodromy search"
    );

    let (tries, retries) = if options.limit == Some(0) {
        (0, 0)
    } else {
        let mut engine = program(options).build();
        engine.run(&mut ctx);
        engine.statistics()
    };

    if ctx.state.cancelled {
        tracing::warn!(
            degree,
            found = ctx.state.triples.len(),
            "monodromy search cancelled"
        );
        return Err(MonodromyError::Cancelled { degree });
    }

    let candidates = ctx.statistics.get(Counters::Candidates);
    debug_assert_eq!(
        ctx.statistics.get(Counters::Triples),
        ctx.state.triples.len() as u64
    );
    tracing::debug!(
        degree,
        candidates,
        triples = ctx.state.triples.len(),
        "monodromy search complete"
    );

    Ok(SearchReport {
        degree,
        strategy: options.strategy,
        triples: ctx.state.triples,
        candidates,
        tries,
        retries,
    })
}

/// Assemble the predicate program for `options`.
fn program(options: &SearchOptions) -> TerminatedProgram {
    let mut builder = EngineBuilder::new()
        .add(Box::new(ChooseSheetPredicate::new(Slot::Zero)))
        .add(Box::new(ChooseSheetPredicate::new(Slot::One)));

    builder = match options.strategy {
        SearchStrategy::Exhaustive => {
            builder.add(Box::new(ChooseSheetPredicate::new(Slot::Infinity)))
        }
        SearchStrategy::InverseElimination => builder.add(Box::new(CloseTriplePredicate)),
    };

    let builder = builder
        .add(Statistics::counting_predicate(Counters::Candidates, None))
        .add(Box::new(MonodromyPredicate))
        .add(Statistics::counting_predicate(Counters::Triples, None))
        .add(Box::new(CollectPredicate));

    match options.limit {
        Some(limit) => builder.terminal(Box::new(LimitPredicate::new(limit))),
        None => builder.terminal(Box::new(FailPredicate)),
    }
}
