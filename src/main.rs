mod assign;
mod assigner;
mod blame;
mod cli;
mod config;
mod error;
mod host;
mod measures;
mod users;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            common,
            config,
            output,
        } => {
            if let Err(err) = assigner::run(
                &common.snapshot,
                config.as_deref(),
                common.json,
                output.as_deref(),
            ) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        Commands::Measures { common, component } => {
            if let Err(err) = measures::run(&common.snapshot, &component, common.json) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}

/// Logs go to stderr so reports on stdout stay clean. A RUST_LOG value
/// overrides the --verbose default.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
