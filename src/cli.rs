/// CLI argument definitions for the `issue-assign` command.
///
/// Defines the subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "issue-assign",
    version,
    about = "Assign static analysis issues to developers from SCM blame data"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by both subcommands.
#[derive(Args)]
pub struct CommonArgs {
    /// Analysis snapshot file (JSON)
    pub snapshot: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Auto-assign the new issues in an analysis snapshot
    #[command(long_about = "\
Auto-assign the new issues in an analysis snapshot.

Each eligible issue is routed to a developer resolved from per-line SCM
measures:

  1. the configured override assignee, when set
  2. the author of the issue line, when it matches the author of the
     file's most recent commit, otherwise that last committer
  3. the configured default assignee

Assignment is off until enabled in the config file. Issues whose blame
data is missing fall back to the default assignee; issues whose blame
data is ambiguous are reported and left unassigned.")]
    Run {
        #[command(flatten)]
        common: CommonArgs,

        /// Settings file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the resolved assignments to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the parsed per-line SCM measures of one component
    Measures {
        #[command(flatten)]
        common: CommonArgs,

        /// Component key, e.g. org:project:src/main.rs
        #[arg(short = 'k', long)]
        component: String,
    },
}
