// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DecomposePredicate - the column decomposition of a filtered candidate.

use tracing::trace;

use crate::context::SearchContext;
use crate::decompose::decompose;
use crate::engine::{Predicate, PredicateResult};

/// Decomposes the current candidate, storing its sections on success.
#[derive(Debug)]
pub struct DecomposePredicate;

impl Predicate for DecomposePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let (Some(candidate), Some(median_length)) = (ctx.candidate, ctx.median_length) else {
            return PredicateResult::Failure;
        };

        match decompose(candidate.t(), candidate.n(), median_length) {
            Ok(sections) => {
                ctx.sections = sections;
                PredicateResult::Success
            }
            Err(mismatch) => {
                trace!(t = candidate.t(), n = candidate.n(), %mismatch, "no decomposition");
                ctx.statistics.record_mismatch(mismatch);
                PredicateResult::Failure
            }
        }
    }

    fn name(&self) -> &str {
        "Decompose"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::Candidate;
    use crate::decompose::Mismatch;

    #[test]
    fn test_stores_sections() {
        let mut ctx = SearchContext::new();
        ctx.candidate = Candidate::from_index(31);
        ctx.median_length = Some(16);
        assert_eq!(DecomposePredicate.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(ctx.sections.len(), 5);
    }

    #[test]
    fn test_mismatch_is_counted() {
        let mut ctx = SearchContext::new();
        ctx.candidate = Candidate::from_index(11);
        ctx.median_length = Some(6);
        assert_eq!(DecomposePredicate.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(ctx.statistics.mismatches(Mismatch::SectionDivisor), 1);
    }

    #[test]
    fn test_requires_filtered_candidate() {
        let mut ctx = SearchContext::new();
        ctx.candidate = Candidate::from_index(7);
        assert_eq!(DecomposePredicate.try_pred(&mut ctx, 0), PredicateResult::Failure);
    }
}
