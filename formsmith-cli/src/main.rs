//! Formsmith CLI - import, validate, and normalize form field schemas.
//!
//! Commands:
//! - `formsmith check <file>`: validate a schema and summarize its fields
//! - `formsmith normalize <file> [-o out]`: rewrite a schema in canonical form
//! - `formsmith preview <file>`: print the control descriptors for a renderer
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use clap::Parser;
use tracing_subscriber::EnvFilter;

use formsmith::SchemaError;
use formsmith_cli::{check, normalize, preview, Cli, Commands};

/// Run a command and map its result to an exit code.
fn handle_result(result: Result<(), SchemaError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("formsmith=debug,formsmith_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Check { file } => handle_result(check::run_check(&file)),
        Commands::Normalize { file, output } => {
            handle_result(normalize::run_normalize(&file, output.as_deref()))
        }
        Commands::Preview { file } => handle_result(preview::run_preview(&file)),
    };

    std::process::exit(exit_code);
}
