// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Top-level search for beautiful triangular numbers.
//!
//! The search runs the predicate program
//!
//! ```text
//! Candidate(first..=last) -> count -> Filter -> count -> Decompose -> Record -> count -> Fail
//! ```
//!
//! over the whole index range `1..=limit_n`, either in one context or split
//! into chunks that run on a worker pool. Chunks are merged in index order, so
//! both ways produce the same report.

use std::fmt;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::arith::limit_n;
use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::decompose::Section;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::error::SearchError;
use crate::predicates::{
    CandidatePredicate, DecomposePredicate, FailPredicate, FilterPredicate, RecordPredicate,
};
use crate::progress::{ProgressObserver, ProgressTracker};
use crate::state::{Counters, Statistics};

/// A beautiful triangular number and its decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeautifulTriangle {
    pub t: u64,
    pub n: u64,
    pub median_length: u64,
    pub sections: Vec<Section>,
}

impl fmt::Display for BeautifulTriangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Triangular Number: {}, Side Length: {}", self.t, self.n)?;
        for (idx, section) in self.sections.iter().enumerate() {
            writeln!(
                f,
                "  Section {}: Columns = {}, Dots = {}",
                idx + 1,
                section.columns,
                section.dots
            )?;
        }
        Ok(())
    }
}

/// Outcome of a complete search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub limit_t: u64,
    pub limit_n: u64,
    /// Beautiful triangles in increasing order of `n`.
    pub triangles: Vec<BeautifulTriangle>,
    pub statistics: Statistics,
    pub elapsed: Duration,
}

impl SearchReport {
    /// Number of triangular numbers examined.
    pub fn checked(&self) -> u64 {
        self.statistics.get(Counters::CandidatesChecked)
    }

    /// Number of triangular numbers that passed the filters.
    pub fn passed_filters(&self) -> u64 {
        self.statistics.get(Counters::PassedFilters)
    }

    /// The beautiful triangular numbers themselves.
    pub fn numbers(&self) -> Vec<u64> {
        self.triangles.iter().map(|triangle| triangle.t).collect()
    }
}

/// The console summary: counts, then each triangle followed by a blank line.
impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total T checked: {}", self.checked())?;
        writeln!(f, "After applying filters: {}", self.passed_filters())?;
        writeln!(f, "Total beautiful triangles found: {}", self.triangles.len())?;
        writeln!(f)?;
        writeln!(f, "Beautiful Triangular Numbers:")?;
        for triangle in &self.triangles {
            writeln!(f, "{}", triangle)?;
        }
        Ok(())
    }
}

/// The search program over the indices `first..=last`.
pub fn search_program(first: u64, last: u64) -> SearchEngine {
    EngineBuilder::new()
        .add(Box::new(CandidatePredicate::new(first, last)))
        .add(Statistics::counting_predicate(Counters::CandidatesChecked))
        .add(Box::new(FilterPredicate))
        .add(Statistics::counting_predicate(Counters::PassedFilters))
        .add(Box::new(DecomposePredicate))
        .add(Box::new(RecordPredicate))
        .add(Statistics::counting_predicate(Counters::BeautifulFound))
        .terminal(Box::new(FailPredicate))
        .build()
}

/// Run the search program over `first..=last` in `ctx`.
pub fn search_range(ctx: &mut SearchContext, first: u64, last: u64) {
    // The program ends in Fail, so the engine never suspends
    let _ = search_program(first, last).search(ctx);
    ctx.finish_candidate();
}

/// Find all beautiful triangular numbers up to `config.limit_t`.
///
/// # Errors
///
/// Fails if the configuration is invalid, the limit is too large, or the
/// worker pool for a parallel search cannot be built.
///
/// # Example
///
/// ```
/// use beautiful_triangles::{find_beautiful_triangles, NoProgress, SearchConfig};
///
/// let report = find_beautiful_triangles(&SearchConfig::new(1000), Box::new(NoProgress)).unwrap();
/// assert_eq!(report.numbers(), vec![6, 28, 496]);
/// ```
pub fn find_beautiful_triangles(
    config: &SearchConfig,
    observer: Box<dyn ProgressObserver>,
) -> Result<SearchReport, SearchError> {
    config.validate()?;
    let limit_n = limit_n(config.limit_t)?;
    let start = Instant::now();
    debug!(limit_t = config.limit_t, limit_n, threads = config.threads, "starting search");

    let mut tracker = ProgressTracker::new(limit_n, observer);
    let (triangles, statistics) = if config.is_parallel() {
        search_parallel(config, limit_n, &mut tracker)?
    } else {
        search_serial(limit_n, &mut tracker)
    };
    tracker.finish();

    let report = SearchReport {
        limit_t: config.limit_t,
        limit_n,
        triangles,
        statistics,
        elapsed: start.elapsed(),
    };
    info!(
        checked = report.checked(),
        passed_filters = report.passed_filters(),
        found = report.triangles.len(),
        elapsed_secs = report.elapsed.as_secs_f64(),
        "search finished"
    );
    Ok(report)
}

fn search_serial(
    limit_n: u64,
    tracker: &mut ProgressTracker,
) -> (Vec<BeautifulTriangle>, Statistics) {
    // The context takes the tracker for the duration of the search
    let progress = std::mem::replace(tracker, ProgressTracker::silent(0));
    let mut ctx = SearchContext::with_progress(progress);
    search_range(&mut ctx, 1, limit_n);
    *tracker = ctx.progress;
    (ctx.results, ctx.statistics)
}

fn search_parallel(
    config: &SearchConfig,
    limit_n: u64,
    tracker: &mut ProgressTracker,
) -> Result<(Vec<BeautifulTriangle>, Statistics), SearchError> {
    let chunks = chunk_ranges(limit_n, config.chunk_size);
    debug!(chunks = chunks.len(), "partitioned index range");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(|e| SearchError::WorkerPool(e.to_string()))?;

    let shared = Mutex::new(tracker);
    let outcomes: Vec<(Vec<BeautifulTriangle>, Statistics)> = pool.install(|| {
        chunks
            .par_iter()
            .map(|&(first, last)| {
                let mut ctx = SearchContext::new();
                search_range(&mut ctx, first, last);
                if let Ok(mut tracker) = shared.lock() {
                    tracker.advance(last - first + 1);
                }
                (ctx.results, ctx.statistics)
            })
            .collect()
    });

    let mut triangles = Vec::new();
    let mut statistics = Statistics::new();
    for (found, stats) in outcomes {
        triangles.extend(found);
        statistics.merge(&stats);
    }
    Ok((triangles, statistics))
}

/// Split `1..=limit_n` into consecutive inclusive ranges of at most `chunk_size`.
pub fn chunk_ranges(limit_n: u64, chunk_size: u64) -> Vec<(u64, u64)> {
    let chunk_size = chunk_size.max(1);
    let mut chunks = Vec::new();
    let mut first = 1;
    while first <= limit_n {
        let last = first.saturating_add(chunk_size - 1).min(limit_n);
        chunks.push((first, last));
        if last == u64::MAX {
            break;
        }
        first = last + 1;
    }
    chunks
}
