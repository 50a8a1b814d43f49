// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! FilterPredicate - rejects candidates that cannot be beautiful.

use tracing::trace;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::filter::{apply_filters, FilterResult};

/// Applies the filters to the current candidate.
///
/// On acceptance the median length is stored in the context; on rejection
/// the reason is counted and the predicate fails.
#[derive(Debug)]
pub struct FilterPredicate;

impl Predicate for FilterPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let Some(candidate) = ctx.candidate else {
            return PredicateResult::Failure;
        };

        match apply_filters(candidate.t(), candidate.n()) {
            FilterResult::Accepted { median_length, .. } => {
                ctx.median_length = Some(median_length);
                PredicateResult::Success
            }
            FilterResult::Rejected(reason) => {
                trace!(t = candidate.t(), n = candidate.n(), %reason, "rejected by filters");
                ctx.statistics.record_rejection(reason);
                PredicateResult::Failure
            }
        }
    }

    fn name(&self) -> &str {
        "Filter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::Candidate;
    use crate::filter::FilterRejection;

    #[test]
    fn test_accepts_and_stores_median() {
        let mut ctx = SearchContext::new();
        ctx.candidate = Candidate::from_index(7);
        assert_eq!(FilterPredicate.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(ctx.median_length, Some(4));
    }

    #[test]
    fn test_rejection_is_counted() {
        let mut ctx = SearchContext::new();
        ctx.candidate = Candidate::from_index(5);
        assert_eq!(FilterPredicate.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(ctx.statistics.rejections(FilterRejection::Semiprime), 1);
        assert!(ctx.median_length.is_none());
    }

    #[test]
    fn test_fails_without_candidate() {
        let mut ctx = SearchContext::new();
        assert_eq!(FilterPredicate.try_pred(&mut ctx, 0), PredicateResult::Failure);
    }
}
