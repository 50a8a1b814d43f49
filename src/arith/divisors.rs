// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Divisor enumeration and pairing.
//!
//! Every divisor `d <= sqrt(T)` pairs with `T / d`. The decomposer reads the
//! pairs from the outside in:
//!
//! ```text
//! T = 28:   (28, 1)  (14, 2)  (7, 4)
//!            ^^^^^^
//!            outermost pair, never used for matching
//!
//! before median: 14, 7     (large side, descending)
//! after median:   2, 4     (small side, ascending)
//! ```
//!
//! For a perfect square the square root has no partner and belongs to
//! neither sequence.

use super::isqrt;

/// All divisors of `t`, largest first. Empty for `t == 0`.
pub fn divisors(t: u64) -> Vec<u64> {
    let mut result = Vec::new();
    for i in 1..=isqrt(t) {
        if t % i == 0 {
            result.push(i);
            if i != t / i {
                result.push(t / i);
            }
        }
    }
    result.sort_unstable_by(|a, b| b.cmp(a));
    result
}

/// Divisors of a number paired symmetrically around its square root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisorPairing {
    /// `(high, low)` pairs with `high * low == t`, outermost first.
    pairs: Vec<(u64, u64)>,
}

impl DivisorPairing {
    /// Pair the divisors of `t`.
    pub fn new(t: u64) -> Self {
        let all = divisors(t);
        let num_pairs = all.len() / 2;
        let pairs = (0..num_pairs)
            .map(|i| (all[i], all[all.len() - 1 - i]))
            .collect();
        Self { pairs }
    }

    /// All pairs, starting with `(t, 1)`.
    pub fn pairs(&self) -> &[(u64, u64)] {
        &self.pairs
    }

    /// Large side of each pair, descending, without `t` itself.
    pub fn before_median(&self) -> Vec<u64> {
        self.pairs.iter().skip(1).map(|&(high, _)| high).collect()
    }

    /// Small side of each pair, ascending, without 1.
    pub fn after_median(&self) -> Vec<u64> {
        self.pairs.iter().skip(1).map(|&(_, low)| low).collect()
    }
}
