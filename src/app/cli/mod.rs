//! CLI Adapter.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::api;
use crate::domain::AppError;

const DEFAULT_LOG_FILTER: &str = "webskel=warn";

#[derive(Parser)]
#[command(name = "webskel")]
#[command(version)]
#[command(
    about = "Create the empty page, API route, library, and style files of a web application",
    long_about = None
)]
struct Cli {
    /// Scaffold into this directory instead of the current one
    #[arg(short = 'C', long, value_name = "DIR")]
    root: Option<PathBuf>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing();

    let result =
        run_scaffold(cli.root).and_then(|()| write_completion(&mut io::stdout().lock()));
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn write_completion(out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "File structure creation complete!")?;
    Ok(())
}

fn run_scaffold(root: Option<PathBuf>) -> Result<(), AppError> {
    match root {
        Some(root) => api::scaffold_at(root)?,
        None => api::scaffold()?,
    };
    Ok(())
}

/// Diagnostics go to stderr so stdout carries only status lines.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
