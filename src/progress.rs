// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Progress reporting.
//!
//! The search knows nothing about consoles. It advances a [`ProgressTracker`],
//! which owns the bookkeeping (start time, last reported percentage) and calls
//! an injected [`ProgressObserver`] once per whole percent.

use std::time::{Duration, Instant};

/// Receives progress updates from a search.
pub trait ProgressObserver: Send {
    /// Called each time the completed percentage passes a new whole percent.
    fn on_progress(&mut self, percent: u64, elapsed: Duration);

    /// Called once when the search has finished.
    #[allow(unused)]
    fn on_finish(&mut self, elapsed: Duration) {}
}

/// Observer that ignores all updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _percent: u64, _elapsed: Duration) {}
}

/// Tracks how many candidates have been processed out of a known total.
pub struct ProgressTracker {
    observer: Box<dyn ProgressObserver>,
    total: u64,
    processed: u64,
    last_reported: u64,
    start: Instant,
    finished: bool,
}

impl ProgressTracker {
    /// Track `total` candidates, reporting to `observer`.
    pub fn new(total: u64, observer: Box<dyn ProgressObserver>) -> Self {
        Self {
            observer,
            total,
            processed: 0,
            last_reported: 0,
            start: Instant::now(),
            finished: false,
        }
    }

    /// A tracker that reports to nobody.
    pub fn silent(total: u64) -> Self {
        Self::new(total, Box::new(NoProgress))
    }

    /// Record `count` more processed candidates.
    pub fn advance(&mut self, count: u64) {
        self.processed = self.processed.saturating_add(count).min(self.total);
        let percent = self.percent();
        if percent > self.last_reported {
            self.last_reported = percent;
            self.observer.on_progress(percent, self.start.elapsed());
        }
    }

    /// Report completion. Reports 100% first if that was never reached.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        let elapsed = self.start.elapsed();
        if self.last_reported < 100 {
            self.last_reported = 100;
            self.observer.on_progress(100, elapsed);
        }
        self.observer.on_finish(elapsed);
    }

    /// Whole percent of candidates processed so far.
    pub fn percent(&self) -> u64 {
        if self.total == 0 {
            return 100;
        }
        (self.processed as u128 * 100 / self.total as u128) as u64
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl std::fmt::Debug for ProgressTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressTracker")
            .field("total", &self.total)
            .field("processed", &self.processed)
            .field("last_reported", &self.last_reported)
            .finish_non_exhaustive()
    }
}
