// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the search.
//!
//! A candidate that is not beautiful is not an error: filters and the
//! decomposer report that with `FilterRejection` and `Mismatch`. These errors
//! are for broken contracts and for searches that cannot be run at all.

use thiserror::Error;

/// Errors returned by the search API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A (T, n) pair that does not satisfy T = n(n+1)/2.
    #[error("{t} is not the triangular number of index {n}")]
    NotTriangular { t: u64, n: u64 },

    /// The limit is too large to compute the index range without overflow.
    #[error("search limit {limit} is too large")]
    LimitTooLarge { limit: u64 },

    /// A configuration value out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The worker pool for a parallel search could not be built.
    #[error("could not build worker pool: {0}")]
    WorkerPool(String),
}
