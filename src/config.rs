// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

use crate::error::SearchError;

/// Largest triangular number examined when no limit is given.
pub const DEFAULT_LIMIT_T: u64 = 34_000_000;

/// Number of consecutive indices handed to one worker in a parallel search.
pub const DEFAULT_CHUNK_SIZE: u64 = 4096;

/// Parameters of a search.
///
/// # Example
///
/// ```
/// use beautiful_triangles::SearchConfig;
///
/// let config = SearchConfig::new(1_000_000).with_threads(4);
/// assert!(config.is_parallel());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Largest triangular number to examine.
    pub limit_t: u64,

    /// Worker threads. 1 runs the serial search, 0 uses one worker per core.
    pub threads: usize,

    /// Indices per work unit in a parallel search.
    pub chunk_size: u64,
}

impl SearchConfig {
    pub fn new(limit_t: u64) -> Self {
        Self {
            limit_t,
            ..Self::default()
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.threads != 1
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.chunk_size == 0 {
            return Err(SearchError::InvalidConfig(
                "chunk size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit_t: DEFAULT_LIMIT_T,
            threads: 1,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
