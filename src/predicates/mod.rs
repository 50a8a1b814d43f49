// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates of the search program. Each predicate
//! is one step of the pipeline applied to a candidate.
//!
//! # Organization
//!
//! - `candidates`: CandidatePredicate, the choice point over `n`
//! - `filter`: FilterPredicate, the cheap rejection filters
//! - `decompose`: DecomposePredicate, the column decomposition
//! - `record`: RecordPredicate, collecting beautiful triangles
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod candidates;
pub mod decompose;
pub mod filter;
pub mod record;

// Re-export main predicates for convenience
pub use candidates::CandidatePredicate;
pub use decompose::DecomposePredicate;
pub use filter::FilterPredicate;
pub use record::RecordPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending the search
/// program with it makes the engine try every candidate.
///
/// # Example
///
/// ```
/// use beautiful_triangles::engine::EngineBuilder;
/// use beautiful_triangles::predicates::{CandidatePredicate, FailPredicate};
/// use beautiful_triangles::context::SearchContext;
///
/// let mut ctx = SearchContext::new();
/// let engine = EngineBuilder::new()
///     .add(Box::new(CandidatePredicate::new(1, 3)))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all candidates then fail
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution, returning control to the caller.
///
/// Useful for stepping through a search one result at a time.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
        // Suspend predicate never retries
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_predicate() {
        let mut ctx = SearchContext::new();
        let mut pred = FailPredicate;
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(pred.retry_pred(&mut ctx, 0, 0), PredicateResult::Failure);
    }

    #[test]
    fn test_suspend_predicate() {
        let mut ctx = SearchContext::new();
        let mut pred = SuspendPredicate;
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Suspend);
        assert_eq!(pred.name(), "Suspend");
    }
}
