//! Aula — interactive course platform shell.
//!
//! # Usage
//!
//! ```text
//! aula [--json] [--no-color]
//! ```
//!
//! Reads menu choices line by line from stdin. The registry lives only for
//! the duration of the process.

mod render;
mod shell;

use std::io;

use anyhow::Result;
use clap::Parser;

use aula_core::Registry;
use render::OutputFormat;
use shell::Shell;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "aula",
    version,
    about = "Register students and teachers, create courses and enroll in them",
    long_about = None,
)]
struct Cli {
    /// Print course and roster views as JSON instead of tables.
    #[arg(long)]
    json: bool,

    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Shell::new(Registry::new(), stdin, stdout, format).run()
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
