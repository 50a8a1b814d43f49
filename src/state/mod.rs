// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search state that outlives a single candidate.
//!
//! - `statistics`: Counters for candidates, survivors, matches and failure reasons

pub mod statistics;

pub use statistics::{Counters, Statistics};
