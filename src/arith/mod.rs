// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer arithmetic underneath the filters and the decomposer.
//!
//! ## Module Structure
//!
//! - `semiprime`: Semiprime test (with the historical exception for 6)
//! - `divisors`: Divisor enumeration and the symmetric divisor pairing
//! - `triangular`: Triangular numbers, search limits and candidates

pub mod divisors;
pub mod semiprime;
pub mod triangular;

pub use divisors::{divisors, DivisorPairing};
pub use semiprime::is_semiprime;
pub use triangular::{candidates, limit_n, triangular, Candidate, Candidates};

/// Integer square root: the largest `r` with `r * r <= n`.
///
/// The floating point estimate is corrected in both directions, so the
/// result is exact for every `u64`.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |square| square > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |square| square <= n) {
        r += 1;
    }
    r
}
