// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The search for beautiful triangular numbers is a program
//! whose first predicate chooses `n` and whose last predicate fails, so the
//! engine visits every `n` and the predicates in between record what they find.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! A predicate that succeeded without choices has nothing left to offer, so
//! backtracking into it continues straight to the entry below.
//!
//! # Example
//!
//! ```
//! use beautiful_triangles::context::SearchContext;
//! use beautiful_triangles::engine::EngineBuilder;
//! use beautiful_triangles::predicates::{CandidatePredicate, SuspendPredicate};
//!
//! let mut ctx = SearchContext::new();
//! let engine = EngineBuilder::new()
//!     .add(Box::new(CandidatePredicate::new(1, 10)))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Suspends with the first candidate chosen
//! let engine = engine.search(&mut ctx).unwrap();
//! assert_eq!(ctx.candidate.map(|c| c.n()), Some(1));
//!
//! // Resuming backtracks into the next choice
//! let _engine = engine.search(&mut ctx).unwrap();
//! assert_eq!(ctx.candidate.map(|c| c.n()), Some(2));
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Expected depth of the predicate stack.
const INITIAL_STACK_CAPACITY: usize = 16;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Whether the last search stopped at a Suspend.
    suspended: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls.
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which guarantees the program ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_CAPACITY),
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - resume by calling search() again, which
    ///   backtracks out of the suspending predicate
    /// - `None` if exhausted (backtracked past first predicate)
    ///
    /// Results are side effects on `ctx`.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence reaches its end without FAIL or
    /// SUSPEND, or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.suspended {
            self.suspended = false;
            self.stack.pop();
        } else {
            self.stack.clear();
            if self.predicates.is_empty() {
                return None;
            }
            self.stack.push(StackEntry::new(0, 0));
        }

        loop {
            let Some(top) = self.stack.len().checked_sub(1) else {
                return None; // Search exhausted
            };
            let predicate_index = self.stack[top].predicate_index;
            let round = self.stack[top].round;

            if !self.stack[top].in_choice_mode {
                self.try_count += 1;
                let result = self.predicates[predicate_index].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => {
                        self.exhaust(top);
                        self.push_next_predicate();
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.exhaust(top);
                        self.push_same_predicate();
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        let entry = &mut self.stack[top];
                        entry.in_choice_mode = true;
                        entry.current_choice = 0;
                        entry.num_choices = n;
                    }
                    PredicateResult::Suspend => {
                        self.suspended = true;
                        return Some(self);
                    }
                }
            } else {
                let entry = &mut self.stack[top];
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }
                let choice = entry.current_choice;
                entry.current_choice += 1;

                self.retry_count += 1;
                let result = self.predicates[predicate_index].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Mark a deterministic entry so backtracking passes through it.
    fn exhaust(&mut self, top: usize) {
        let entry = &mut self.stack[top];
        entry.in_choice_mode = true;
        entry.current_choice = 0;
        entry.num_choices = 0;
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self) {
        let next_index = self.stack.last().map_or(0, |entry| entry.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry::new(next_index, 0));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self) {
        if let Some(current) = self.stack.last() {
            let entry = StackEntry::new(current.predicate_index, current.round + 1);
            self.stack.push(entry);
        }
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder for predicate programs.
///
/// A program is a sequence of predicates closed by a terminal predicate.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Close the program with a terminal predicate.
    pub fn terminal<P: TerminalPredicate + 'static>(mut self, predicate: Box<P>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A program that has been closed by a terminal predicate.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{FailPredicate, SuspendPredicate};
    use crate::state::statistics::{Counters, Statistics};

    /// Test predicate that always succeeds.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Test predicate that always fails.
    #[derive(Debug)]
    struct AlwaysFail;

    impl Predicate for AlwaysFail {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Failure
        }
    }

    /// Test predicate offering `n` choices, of which only odd ones succeed.
    #[derive(Debug)]
    struct OddChoices(usize);

    impl Predicate for OddChoices {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(self.0)
        }

        fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
            if choice % 2 == 1 {
                PredicateResult::Success
            } else {
                PredicateResult::Failure
            }
        }
    }

    /// Test predicate that runs for three rounds.
    #[derive(Debug)]
    struct ThreeRounds;

    impl Predicate for ThreeRounds {
        fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
            if round < 2 {
                PredicateResult::SuccessSamePredicate
            } else {
                PredicateResult::Success
            }
        }
    }

    #[test]
    fn test_simple_success_with_suspend() {
        let mut ctx = SearchContext::new();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx);
        assert!(engine.is_some()); // Suspended - engine returned
        let engine = engine.unwrap();
        assert_eq!(engine.statistics(), (2, 0)); // AlwaysSucceed + Suspend, no retries
    }

    #[test]
    fn test_resume_after_deterministic_success_exhausts() {
        let mut ctx = SearchContext::new();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).unwrap();
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_immediate_failure() {
        let mut ctx = SearchContext::new();
        let engine = SearchEngine::new(vec![Box::new(AlwaysFail)]);

        let result = engine.search(&mut ctx);
        assert!(result.is_none()); // Exhausted - engine consumed
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = SearchContext::new();
        let engine = SearchEngine::new(vec![]);

        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_fail_terminal_visits_every_choice() {
        let mut ctx = SearchContext::new();
        let engine = EngineBuilder::new()
            .add(Box::new(OddChoices(6)))
            .add(Statistics::counting_predicate(Counters::BeautifulFound))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
        // choices 1, 3 and 5 reach the counter
        assert_eq!(ctx.statistics.get(Counters::BeautifulFound), 3);
    }

    #[test]
    fn test_statistics_count_retries() {
        let mut ctx = SearchContext::new();
        let engine = EngineBuilder::new()
            .add(Box::new(OddChoices(4)))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).unwrap();
        // choice 0 fails, choice 1 succeeds
        assert_eq!(engine.statistics(), (2, 2));
    }

    #[test]
    fn test_multi_round_predicate() {
        let mut ctx = SearchContext::new();
        let engine = EngineBuilder::new()
            .add(Box::new(ThreeRounds))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).unwrap();
        assert_eq!(engine.statistics(), (4, 0)); // rounds 0, 1, 2 + Suspend
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = SearchContext::new();
        let engine = SearchEngine::new(vec![Box::new(AlwaysSucceed)]);

        let _ = engine.search(&mut ctx);
    }
}
