// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for the search engine.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! either narrows the current candidate (succeed or fail) or opens a choice
//! point (the choice of `n`).
//!
//! # Example
//!
//! ```
//! use beautiful_triangles::engine::{Predicate, PredicateResult};
//! use beautiful_triangles::context::SearchContext;
//!
//! #[derive(Debug)]
//! struct EvenIndexPredicate;
//!
//! impl Predicate for EvenIndexPredicate {
//!     fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         match ctx.candidate {
//!             Some(candidate) if candidate.n() % 2 == 0 => PredicateResult::Success,
//!             _ => PredicateResult::Failure,
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "EvenIndex"
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::context::SearchContext;

/// Result of attempting a predicate.
///
/// Predicates can return:
/// - `Success`: Move to next predicate in the sequence
/// - `SuccessSamePredicate`: Stay at same predicate, increment round
/// - `Failure`: Backtrack to previous predicate
/// - `Choices(n)`: Predicate has n choices to explore via retry_pred
/// - `Suspend`: Pause execution for testing/inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// A terminal predicate that ends a program.
///
/// Terminal predicates are FAIL or SUSPEND - they never return Success.
/// `EngineBuilder::terminal` only accepts these, so every program built
/// with the builder ends properly.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Failure: engine backtracks to previous predicate
/// 4. If Choices(n): engine calls `retry_pred` for choices 0..n, advancing
///    after each successful choice and coming back to the next one on backtrack
///
/// State is not undone on backtrack. A predicate must overwrite the context
/// fields it owns each time it runs.
pub trait Predicate: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    /// Cannot return Choices or Suspend (we're already in choice mode).
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for debugging and logging. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
