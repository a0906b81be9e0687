//! CLI argument definitions for modsel.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "modsel",
    version,
    about = "Per-module-version Minimum Version Selection for a module registry",
    long_about = "modsel computes, for every module version in a registry snapshot, which \
                  version of each transitive dependency would be selected if that module \
                  version were the build root."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve every module version and print the selections as JSON
    Resolve {
        /// Registry snapshot (TOML)
        snapshot: PathBuf,
        /// Configuration file
        #[arg(short, long, env = "MODSEL_CONFIG")]
        config: Option<PathBuf>,
        /// Maximum number of resolution workers
        #[arg(short, long)]
        jobs: Option<usize>,
        /// Write the JSON result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Report circular dependency groups
    Cycles {
        /// Registry snapshot (TOML)
        snapshot: PathBuf,
    },

    /// List module versions referenced as dependencies but never defined
    Unresolved {
        /// Registry snapshot (TOML)
        snapshot: PathBuf,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
