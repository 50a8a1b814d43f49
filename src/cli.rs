// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::io::Write;
use std::time::Duration;

use beautiful_triangles::config::{DEFAULT_CHUNK_SIZE, DEFAULT_LIMIT_T};
use beautiful_triangles::{ProgressObserver, SearchConfig, SearchReport};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "triangles")]
#[command(author, version, about = "Search for beautiful triangular numbers")]
pub struct Cli {
    /// Largest triangular number to examine
    #[arg(env = "TRIANGLES_LIMIT", default_value_t = DEFAULT_LIMIT_T)]
    pub limit: u64,

    /// Worker threads (1 = serial search, 0 = one per core)
    #[arg(short, long, env = "TRIANGLES_THREADS", default_value_t = 1)]
    pub threads: usize,

    /// Indices per work unit in a parallel search
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: u64,

    /// Do not show progress
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format of the report
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Cli {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(self.limit)
            .with_threads(self.threads)
            .with_chunk_size(self.chunk_size)
    }
}

/// Log filter from `RUST_LOG`, or `info` (`warn` when quiet) if it is unset or invalid.
pub fn log_filter(rust_log: Option<&str>, quiet: bool) -> EnvFilter {
    let default = if quiet { "warn" } else { "info" };
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

pub fn progress_line(percent: u64, elapsed: Duration) -> String {
    format!(
        "Progress: {}% | Elapsed time: {:.2}s",
        percent,
        elapsed.as_secs_f64()
    )
}

/// Progress line rewritten in place on stderr.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl ProgressObserver for ConsoleProgress {
    fn on_progress(&mut self, percent: u64, elapsed: Duration) {
        eprint!("{}\r", progress_line(percent, elapsed));
        let _ = std::io::stderr().flush();
    }

    fn on_finish(&mut self, _elapsed: Duration) {
        eprintln!();
    }
}

pub fn print_text_report(report: &SearchReport) {
    print!("{}", report);
}
