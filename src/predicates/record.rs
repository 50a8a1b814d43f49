// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! RecordPredicate - collects the current candidate as a beautiful triangle.

use tracing::debug;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::search::BeautifulTriangle;

#[derive(Debug)]
pub struct RecordPredicate;

impl Predicate for RecordPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let (Some(candidate), Some(median_length)) = (ctx.candidate, ctx.median_length) else {
            return PredicateResult::Failure;
        };
        if ctx.sections.is_empty() {
            return PredicateResult::Failure;
        }

        debug!(t = candidate.t(), n = candidate.n(), "beautiful triangular number");
        ctx.results.push(BeautifulTriangle {
            t: candidate.t(),
            n: candidate.n(),
            median_length,
            sections: std::mem::take(&mut ctx.sections),
        });
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Record"
    }
}
