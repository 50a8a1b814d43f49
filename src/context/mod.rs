// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context: the state shared by the predicates of one search.
//!
//! The context holds:
//! - The current candidate and what the filters and decomposer made of it
//! - The beautiful triangles found so far
//! - Statistics and progress for the whole search
//!
//! Each context is independent, so a parallel search runs one context per
//! chunk of the index range and merges them afterwards.

use crate::arith::Candidate;
use crate::decompose::Section;
use crate::progress::ProgressTracker;
use crate::search::BeautifulTriangle;
use crate::state::Statistics;

/// Search context threaded through every predicate.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     candidate, median_length, sections   // current candidate, overwritten per choice
///     results, statistics, progress        // accumulated over the search
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Candidate chosen by `CandidatePredicate`.
    pub candidate: Option<Candidate>,

    /// Median length of the current candidate, set when it passes the filters.
    pub median_length: Option<u64>,

    /// Sections of the current candidate, set when it decomposes.
    pub sections: Vec<Section>,

    /// Beautiful triangles found so far, in the order they were found.
    pub results: Vec<BeautifulTriangle>,

    pub statistics: Statistics,

    pub progress: ProgressTracker,
}

impl SearchContext {
    /// A context with a silent progress tracker.
    pub fn new() -> Self {
        Self::with_progress(ProgressTracker::silent(0))
    }

    /// A context reporting progress through `progress`.
    pub fn with_progress(progress: ProgressTracker) -> Self {
        Self {
            candidate: None,
            median_length: None,
            sections: Vec::new(),
            results: Vec::new(),
            statistics: Statistics::new(),
            progress,
        }
    }

    /// Forget everything about the current candidate.
    pub fn clear_candidate(&mut self) {
        self.candidate = None;
        self.median_length = None;
        self.sections.clear();
    }

    /// Count the current candidate as processed, then clear it.
    pub fn finish_candidate(&mut self) {
        if self.candidate.is_some() {
            self.progress.advance(1);
        }
        self.clear_candidate();
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Counters;

    #[test]
    fn test_search_context_new() {
        let ctx = SearchContext::new();
        assert!(ctx.candidate.is_none());
        assert!(ctx.results.is_empty());
        assert_eq!(ctx.statistics.get(Counters::CandidatesChecked), 0);
    }

    #[test]
    fn test_clear_candidate_keeps_results() {
        let mut ctx = SearchContext::new();
        ctx.candidate = Candidate::from_index(3);
        ctx.median_length = Some(2);
        ctx.sections.push(Section { columns: 1, dots: 3 });
        ctx.results.push(BeautifulTriangle {
            t: 6,
            n: 3,
            median_length: 2,
            sections: vec![Section { columns: 1, dots: 3 }, Section { columns: 1, dots: 3 }],
        });

        ctx.clear_candidate();
        assert!(ctx.candidate.is_none());
        assert!(ctx.median_length.is_none());
        assert!(ctx.sections.is_empty());
        assert_eq!(ctx.results.len(), 1);
    }

    #[test]
    fn test_finish_candidate_advances_progress_once() {
        let mut ctx = SearchContext::with_progress(ProgressTracker::silent(10));
        ctx.finish_candidate();
        assert_eq!(ctx.progress.processed(), 0);

        ctx.candidate = Candidate::from_index(3);
        ctx.finish_candidate();
        assert_eq!(ctx.progress.processed(), 1);
        assert!(ctx.candidate.is_none());

        ctx.finish_candidate();
        assert_eq!(ctx.progress.processed(), 1);
    }
}
