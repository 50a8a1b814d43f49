// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use beautiful_triangles::ProgressObserver;

/// The beautiful triangular numbers below 34,000,000, with their indices.
pub const KNOWN_BEAUTIFUL: [(u64, u64); 4] = [(6, 3), (28, 7), (496, 31), (8128, 127)];

/// Primes below 100.
pub const SMALL_PRIMES: [u64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Observer that remembers every update it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub percents: Arc<Mutex<Vec<u64>>>,
    pub finishes: Arc<Mutex<u32>>,
}

impl RecordingObserver {
    pub fn percents(&self) -> Vec<u64> {
        self.percents.lock().unwrap().clone()
    }

    pub fn finishes(&self) -> u32 {
        *self.finishes.lock().unwrap()
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_progress(&mut self, percent: u64, _elapsed: Duration) {
        self.percents.lock().unwrap().push(percent);
    }

    fn on_finish(&mut self, _elapsed: Duration) {
        *self.finishes.lock().unwrap() += 1;
    }
}
