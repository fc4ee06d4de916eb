use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use asx_resolver as lib;

#[derive(Parser)]
#[command(name = "asx-resolver", version)]
struct Cli {
    /// Directory to scan recursively for .asx playlist files
    directory: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Honor RUST_LOG if set, otherwise default to info. Diagnostics go to
    // stdout as plain lines.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stdout));
    tracing::subscriber::set_global_default(subscriber)
        .expect("failed to set global tracing subscriber");

    let directory = match cli.directory {
        Some(d) => d,
        None => {
            println!("No directory path provided. Please specify the path as a command-line argument.");
            return Ok(());
        }
    };

    // Per-file failures are logged inside the run and never abort it; the
    // process exits 0 regardless of partial failures.
    let stats = lib::worker::run(&directory)?;
    println!(
        "Done: {} copied, {} skipped, {} failed.",
        stats.copied, stats.skipped, stats.failed
    );

    Ok(())
}
