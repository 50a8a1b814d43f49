// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cheap filters applied before the decomposition.
//!
//! The checks run cheapest first and stop at the first rejection:
//!
//! 1. `T` must be divisible by `n`, giving the median length `T / n`
//! 2. `T` must be even or a multiple of 3
//! 3. `T` must not be a semiprime

use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};
use thiserror::Error;

use crate::arith::is_semiprime;

/// Why a candidate was rejected by the filters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Error, EnumCountMacro, EnumIter, IntoStaticStr,
)]
#[repr(u8)]
pub enum FilterRejection {
    /// `T mod n != 0`.
    #[error("not divisible by its index")]
    IndivisibleByIndex,

    /// `T` is odd and not a multiple of 3.
    #[error("neither even nor a multiple of 3")]
    NeitherEvenNorMultipleOfThree,

    /// `T` is a product of two distinct primes.
    #[error("semiprime")]
    Semiprime,
}

/// Outcome of [`apply_filters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterResult {
    Rejected(FilterRejection),
    Accepted { n: u64, median_length: u64 },
}

impl FilterResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FilterResult::Accepted { .. })
    }

    /// `(n, median_length)` for an accepted candidate.
    pub fn accepted(self) -> Option<(u64, u64)> {
        match self {
            FilterResult::Accepted { n, median_length } => Some((n, median_length)),
            FilterResult::Rejected(_) => None,
        }
    }
}

/// Apply the filters to the triangular number `t` with index `n`.
///
/// Assumes `t == n(n+1)/2`; this is not re-validated. An index of 0 is
/// rejected as indivisible.
///
/// # Example
///
/// ```
/// use beautiful_triangles::filter::{apply_filters, FilterRejection, FilterResult};
///
/// assert_eq!(
///     apply_filters(28, 7),
///     FilterResult::Accepted { n: 7, median_length: 4 }
/// );
/// assert_eq!(
///     apply_filters(15, 5),
///     FilterResult::Rejected(FilterRejection::Semiprime)
/// );
/// ```
pub fn apply_filters(t: u64, n: u64) -> FilterResult {
    if n == 0 || t % n != 0 {
        return FilterResult::Rejected(FilterRejection::IndivisibleByIndex);
    }
    let median_length = t / n;

    if t % 2 != 0 && t % 3 != 0 {
        return FilterResult::Rejected(FilterRejection::NeitherEvenNorMultipleOfThree);
    }

    if is_semiprime(t) {
        return FilterResult::Rejected(FilterRejection::Semiprime);
    }

    FilterResult::Accepted { n, median_length }
}
