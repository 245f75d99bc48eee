//! Command-line interface for genmod.
//!
//! Each command lives in its own module with its own argument struct and
//! execution logic, dispatched from [`Cli::execute`].
//!
//! # Available Commands
//!
//! - `model` - generate a model file from a name and attribute tokens
//!
//! # Global Options
//!
//! - `--verbose` - enable debug output
//! - `--quiet` - suppress all output except errors
//!
//! # Example
//!
//! ```bash
//! genmod model user name age:number
//! genmod model post title body:text --coffee
//! ```

mod model;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Root CLI structure: the subcommand plus global verbosity flags.
#[derive(Parser)]
#[command(
    name = "genmod",
    version,
    about = "Scaffold data-model files for Node-style web projects"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    ///
    /// Equivalent to `RUST_LOG=debug`. Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors, for scripts and CI.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a model file from a model name and attribute tokens.
    ///
    /// See [`model::ModelCommand`] for detailed options and behavior.
    Model(model::ModelCommand),
}

impl Cli {
    /// Tracing filter directive matching the verbosity flags. `RUST_LOG`
    /// takes precedence when set; see `main`.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Execute the parsed command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Model(cmd) => cmd.execute(),
        }
    }
}
