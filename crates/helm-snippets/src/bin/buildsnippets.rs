// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Prints the Helm snippet file assembled from the raw fixtures.
//!
//! Usage:
//!   buildsnippets > snippets/helm.json

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use helm_snippets::{assemble, DEFAULT_SNIPPET_DIR, SNIPPET_SOURCES};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Assemble the Helm snippet file from raw fixtures")]
struct Args {
    /// Directory containing the raw snippet fixtures
    #[arg(long, default_value = DEFAULT_SNIPPET_DIR)]
    dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();

    let snippets = assemble(&args.dir, SNIPPET_SOURCES)
        .with_context(|| format!("assembling snippets from {}", args.dir.display()))?;
    snippets.write_json(io::stdout().lock())?;
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
