// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::time::Instant;

use anyhow::Result;
use beautiful_triangles::{find_beautiful_triangles, NoProgress, ProgressObserver};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*};

mod cli;

use cli::{Cli, ConsoleProgress, Format};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(cli::log_filter(rust_log.as_deref(), cli.quiet))
        .init();

    let config = cli.search_config();

    let observer: Box<dyn ProgressObserver> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ConsoleProgress)
    };

    let start = Instant::now();
    let report = find_beautiful_triangles(&config, observer)?;

    match cli.format {
        Format::Text => {
            cli::print_text_report(&report);
            println!("Execution time: {:.2} seconds", start.elapsed().as_secs_f64());
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
