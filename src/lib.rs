// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Monodromy data of Belyi maps.
//!
//! A Belyi map of degree n is a cover of the sphere branched only over 0, 1
//! and ∞. Walking around each branch point permutes the n sheets, giving a
//! triple (σ₀, σ₁, σ∞) of permutations of {1..n} whose product σ₀·σ₁·σ∞ is
//! the identity. This crate enumerates such triples for small n and turns
//! each one into its dessin d'enfant.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! - The lexicographic listing of S_n (n! permutations)
//! - The identity permutation
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! - The indices of the σ₀, σ₁, σ∞ currently chosen
//! - Triples accepted so far, and the search counters
//!
//! # Search Algorithm
//!
//! The search is a program of predicates run by a backtracking engine:
//!
//! 1. **ChooseSheet(σ₀)**, **ChooseSheet(σ₁)**: try every element of S_n
//! 2. **ChooseSheet(σ∞)** or **CloseTriple**: try every σ∞, or compute the
//!    only one that can work, (σ₀σ₁)⁻¹
//! 3. **Monodromy**: reject unless σ₀·σ₁·σ∞ = 1
//! 4. **Collect**: record the triple
//!
//! Choices are explored depth-first in lexicographic order, so results are
//! ordered by σ₀, then σ₁, then σ∞. The exhaustive program visits (n!)³
//! candidates, which keeps practical degrees at 4 or below.
//!
//! # Example
//!
//! ```
//! use belyi_monodromy::{build_dessin, cycles, search};
//!
//! let triples = search(3).unwrap();
//! assert_eq!(triples.len(), 36);
//!
//! let first_rotation = triples
//!     .iter()
//!     .find(|t| t.sigma_1().cycles().len() == 1 && t.sigma_1().cycles()[0].len() == 3)
//!     .unwrap();
//! assert_eq!(cycles(first_rotation.sigma_1())[0].elements(), &[1, 2, 3]);
//! assert!(build_dessin(first_rotation).is_connected());
//! ```

pub mod context;
pub mod dessin;
pub mod engine;
pub mod error;
pub mod group;
pub mod monodromy;
pub mod predicates;
pub mod state;

// Re-export commonly used types
pub use context::SearchContext;
pub use dessin::{build_dessin, Dessin};
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::{MonodromyError, Result};
pub use group::{compose, cycles, inverse, is_identity, Cycle, Permutation, SymmetricGroup};
pub use monodromy::{
    is_monodromy, search, search_with, MonodromyTriple, SearchOptions, SearchReport,
    SearchStrategy,
};
