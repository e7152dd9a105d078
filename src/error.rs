// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for permutation algebra and monodromy search.

/// Errors raised by the monodromy core.
///
/// None of these are retried internally: every operation is a pure function
/// of its inputs, so the caller decides how to report them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonodromyError {
    /// Two permutations of different degree were combined.
    #[error("permutations must have same degree (got {left} and {right})")]
    DegreeMismatch { left: usize, right: usize },

    /// The search was asked for a degree it does not support.
    #[error("degree {degree} is out of range: degree must be at least 1")]
    InvalidDegree { degree: usize },

    /// A sequence of images is not a bijection of {1..n}.
    #[error("invalid permutation: {reason}")]
    InvalidPermutation { reason: String },

    /// σ₀·σ₁·σ∞ is not the identity.
    #[error("σ₀·σ₁·σ∞ is not the identity permutation")]
    NotMonodromy,

    /// The caller raised the cancellation flag during the search.
    #[error("search of degree {degree} was cancelled")]
    Cancelled { degree: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MonodromyError>;
