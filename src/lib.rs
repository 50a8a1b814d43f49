// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for beautiful triangular numbers.
//!
//! A triangular number `T = n(n+1)/2` is *beautiful* when the columns of its
//! doubled triangle (an `n x (n+1)` rectangle of dots) can be cut into
//! sections whose dot counts reproduce the divisors of `T`: the first section
//! takes half of the median length `T / n`, each following section half of
//! what is left, and a single column remains. The first four are the perfect
//! numbers 6, 28, 496 and 8128.
//!
//! # Architecture
//!
//! ## Core (pure functions)
//!
//! - [`arith`]: semiprime test, divisor pairing, triangular numbers
//! - [`filter`]: cheap rejection of candidates (`apply_filters`)
//! - [`decompose`]: the column decomposition (`analyze`, `decompose`)
//!
//! ## Search
//!
//! The driver is a predicate program run by a backtracking engine:
//! - [`engine`]: predicates, the engine and its builder
//! - [`predicates`]: one predicate per pipeline step, plus Fail/Suspend
//! - [`context`]: state threaded through the predicates
//! - [`state`]: statistics counters
//! - [`progress`]: injected progress observer
//! - [`search`]: the full search, serial or over a worker pool
//!
//! # Parallelization
//!
//! Candidates are independent, so the index range splits into chunks, each
//! searched in its own context. Chunk results are concatenated in index order
//! and their statistics summed.

pub mod arith;
pub mod config;
pub mod context;
pub mod decompose;
pub mod engine;
pub mod error;
pub mod filter;
pub mod predicates;
pub mod progress;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use arith::{candidates, is_semiprime, Candidate};
pub use config::SearchConfig;
pub use context::SearchContext;
pub use decompose::{analyze, decompose, Mismatch, Section};
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::SearchError;
pub use filter::{apply_filters, FilterRejection, FilterResult};
pub use progress::{NoProgress, ProgressObserver, ProgressTracker};
pub use search::{find_beautiful_triangles, BeautifulTriangle, SearchReport};
