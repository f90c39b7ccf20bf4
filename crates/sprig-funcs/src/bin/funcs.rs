// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Prints a regular expression matching every Sprig helper name.
//!
//! The output is pasted into the Helm tmLanguage grammar:
//!   funcs > /tmp/sprig-funcs.txt

use std::io::{self, Write};

use clap::Parser;
use sprig_funcs::{function_pattern, sprig_registry};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Print an alternation of all Sprig helper names")]
struct Args {}

fn main() -> anyhow::Result<()> {
    Args::parse();
    init_logging();

    let pattern = function_pattern(&sprig_registry())?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(pattern.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
