//! CLI definition for the formsmith command-line interface.
//!
//! This module is self-contained — it only depends on `clap` and `std`, so
//! help text, parsing, and the command surface can be tested without touching
//! the schema engine.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Formsmith - import, validate, and normalize form field schemas.
///
/// A schema is a JSON array of field objects (`label`, `type`, and the
/// attributes the type requires). `check` validates one and summarizes its
/// fields, `normalize` rewrites it in canonical form, and `preview` prints
/// the control descriptors a renderer would receive.
#[derive(Parser, Debug)]
#[command(name = "formsmith")]
#[command(version)]
#[command(about = "Import, validate, and normalize form field schemas")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a schema file and summarize its fields
    Check {
        /// Path to the schema JSON file
        file: PathBuf,
    },

    /// Rewrite a schema file in canonical form
    Normalize {
        /// Path to the schema JSON file
        file: PathBuf,
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the control descriptors a renderer would receive
    Preview {
        /// Path to the schema JSON file
        file: PathBuf,
    },
}
