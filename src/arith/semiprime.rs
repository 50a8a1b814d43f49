// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Semiprime test.
//!
//! A semiprime here is a product of exactly two *distinct* primes, so squares
//! of primes are excluded. The number 6 is also excluded: this is a historical
//! quirk of the search and is kept as is, since it lets the first beautiful
//! triangular number survive the filters.

/// The one product of two distinct primes that is not treated as a semiprime.
pub const EXCLUDED_SEMIPRIME: u64 = 6;

/// Determine whether `n` is the product of exactly two distinct primes.
///
/// Trial division by increasing `i`. A hit divides `n` once and re-tests the
/// same `i`; hitting the same factor twice in a row means a repeated prime and
/// rejects immediately, as does a third factor.
///
/// # Example
///
/// ```
/// use beautiful_triangles::arith::is_semiprime;
///
/// assert!(is_semiprime(15));
/// assert!(!is_semiprime(9));
/// assert!(!is_semiprime(30));
/// assert!(!is_semiprime(6));
/// ```
pub fn is_semiprime(n: u64) -> bool {
    if n == EXCLUDED_SEMIPRIME {
        return false;
    }

    let mut remaining = n;
    let mut count = 0u32;
    let mut last_factor: Option<u64> = None;
    let mut i = 2u64;

    // i <= remaining / i is i * i <= remaining without overflow
    while i <= remaining / i {
        if remaining % i == 0 {
            count += 1;
            if count > 2 {
                return false;
            }
            remaining /= i;
            if last_factor == Some(i) {
                return false;
            }
            last_factor = Some(i);
        } else {
            i += 1;
        }
    }

    if remaining > 1 {
        count += 1;
        if last_factor == Some(remaining) {
            return false;
        }
    }

    count == 2
}
