// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Triangular numbers and search candidates.

use serde::Serialize;

use super::isqrt;
use crate::error::SearchError;

/// The `n`th triangular number `n(n+1)/2`, or `None` on overflow.
pub fn triangular(n: u64) -> Option<u64> {
    // One of n, n+1 is even; halve it before multiplying
    let next = n.checked_add(1)?;
    if n % 2 == 0 {
        (n / 2).checked_mul(next)
    } else {
        n.checked_mul(next / 2)
    }
}

/// The largest `n` with `n(n+1)/2 <= limit_t`.
///
/// # Errors
///
/// Returns `SearchError::LimitTooLarge` if `8 * limit_t + 1` overflows.
///
/// # Example
///
/// ```
/// use beautiful_triangles::arith::limit_n;
///
/// assert_eq!(limit_n(0).unwrap(), 0);
/// assert_eq!(limit_n(1000).unwrap(), 44); // T(44) = 990
/// ```
pub fn limit_n(limit_t: u64) -> Result<u64, SearchError> {
    let discriminant = limit_t
        .checked_mul(8)
        .and_then(|d| d.checked_add(1))
        .ok_or(SearchError::LimitTooLarge { limit: limit_t })?;
    Ok((isqrt(discriminant) - 1) / 2)
}

/// A triangular number together with its index.
///
/// The invariant `t == n(n+1)/2` is checked on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
    t: u64,
    n: u64,
}

impl Candidate {
    /// Create a candidate, checking that `t` is the `n`th triangular number.
    pub fn new(t: u64, n: u64) -> Result<Self, SearchError> {
        match triangular(n) {
            Some(expected) if expected == t => Ok(Self { t, n }),
            _ => Err(SearchError::NotTriangular { t, n }),
        }
    }

    /// The candidate with index `n`, or `None` if `T(n)` overflows.
    pub fn from_index(n: u64) -> Option<Self> {
        triangular(n).map(|t| Self { t, n })
    }

    /// The triangular number.
    pub fn t(&self) -> u64 {
        self.t
    }

    /// The index (side length of the triangle).
    pub fn n(&self) -> u64 {
        self.n
    }
}

/// Lazy sequence of candidates for `n = 1..=limit_n`.
#[derive(Debug, Clone)]
pub struct Candidates {
    next: u64,
    last: u64,
}

impl Candidates {
    /// Candidates with indices in `first..=last`.
    pub fn between(first: u64, last: u64) -> Self {
        Self { next: first, last }
    }

    /// Number of candidates not yet produced.
    pub fn remaining(&self) -> u64 {
        if self.next > self.last {
            0
        } else {
            self.last - self.next + 1
        }
    }
}

impl Iterator for Candidates {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.next > self.last {
            return None;
        }
        let candidate = Candidate::from_index(self.next)?;
        self.next += 1;
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// All candidates with `T <= limit_t`, in increasing order of `n`.
///
/// # Example
///
/// ```
/// use beautiful_triangles::arith::candidates;
///
/// let ts: Vec<u64> = candidates(10).unwrap().map(|c| c.t()).collect();
/// assert_eq!(ts, vec![1, 3, 6, 10]);
/// ```
pub fn candidates(limit_t: u64) -> Result<Candidates, SearchError> {
    Ok(Candidates::between(1, limit_n(limit_t)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangular() {
        let expected = [0, 1, 3, 6, 10, 15, 21, 28, 36, 45];
        for (n, &t) in expected.iter().enumerate() {
            assert_eq!(triangular(n as u64), Some(t));
        }
        assert_eq!(triangular(u64::MAX), None);
    }

    #[test]
    fn test_limit_n() {
        assert_eq!(limit_n(0), Ok(0));
        assert_eq!(limit_n(1), Ok(1));
        assert_eq!(limit_n(2), Ok(1));
        assert_eq!(limit_n(3), Ok(2));
        assert_eq!(limit_n(6), Ok(3));
        assert_eq!(limit_n(10_000), Ok(140));
        assert_eq!(limit_n(2_000_000), Ok(1999));
        assert_eq!(limit_n(34_000_000), Ok(8245));
    }

    #[test]
    fn test_limit_n_is_tight() {
        for limit in 0..2000u64 {
            let n = limit_n(limit).unwrap();
            assert!(triangular(n).unwrap() <= limit);
            assert!(triangular(n + 1).unwrap() > limit);
        }
    }

    #[test]
    fn test_limit_too_large() {
        assert_eq!(
            limit_n(u64::MAX),
            Err(SearchError::LimitTooLarge { limit: u64::MAX })
        );
    }

    #[test]
    fn test_candidate_contract() {
        assert!(Candidate::new(28, 7).is_ok());
        assert_eq!(
            Candidate::new(27, 7),
            Err(SearchError::NotTriangular { t: 27, n: 7 })
        );
    }

    #[test]
    fn test_empty_candidates() {
        assert_eq!(candidates(0).unwrap().count(), 0);
    }

    #[test]
    fn test_candidates_size_hint() {
        let seq = candidates(1000).unwrap();
        assert_eq!(seq.size_hint(), (44, Some(44)));
        assert_eq!(seq.last().map(|c| c.t()), Some(990));
    }
}
