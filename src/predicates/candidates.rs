// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CandidatePredicate - the choice of `n`.
//!
//! This is the only choice point of the search: one choice per index in the
//! range, in increasing order. Each choice stores the candidate in the context.
//! Backtracking into this predicate means the previous candidate has been
//! fully processed, so it is counted towards progress before the next one.

use crate::arith::Candidate;
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// Chooses each index in `first..=last` in turn.
#[derive(Debug)]
pub struct CandidatePredicate {
    first: u64,
    last: u64,
}

impl CandidatePredicate {
    /// Choose every index in `first..=last`. An empty range fails at once.
    pub fn new(first: u64, last: u64) -> Self {
        Self { first, last }
    }

    /// Number of indices in the range.
    pub fn count(&self) -> usize {
        if self.first > self.last {
            0
        } else {
            usize::try_from(self.last - self.first + 1).unwrap_or(usize::MAX)
        }
    }
}

impl Predicate for CandidatePredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let count = self.count();
        if count > 0 {
            PredicateResult::Choices(count)
        } else {
            PredicateResult::Failure
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        ctx.finish_candidate();

        let candidate = self
            .first
            .checked_add(choice as u64)
            .and_then(Candidate::from_index);
        match candidate {
            Some(candidate) => {
                ctx.candidate = Some(candidate);
                PredicateResult::Success
            }
            None => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "Candidate"
    }
}
