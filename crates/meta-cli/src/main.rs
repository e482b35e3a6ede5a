//! meta-check CLI
//!
//! Finds and fixes missing or dangling Unity `.meta` files.

mod cli;
mod commands;
mod config;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::RunConfig;
use error::Result;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{}: {}", "hint".yellow().bold(), hint);
            }
            std::process::exit(1);
        }
    }
}

/// Log to stderr so stdout only carries reports.
///
/// `RUST_LOG` takes precedence over the verbosity flags.
fn init_logging(verbose: bool, silent: bool) {
    let default_level = if verbose {
        "debug"
    } else if silent {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
    tracing::debug!("Verbose mode enabled");
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.silent);

    match cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "meta-check", &mut std::io::stdout());
            Ok(true)
        }
        Commands::Check { scan, output } => {
            let cwd = std::env::current_dir()?;
            let config = RunConfig::load(cli.config.as_deref())?;
            commands::run_check(&cwd, &config, &scan, &output)
        }
        Commands::Fix {
            scan,
            allow,
            dry_run,
        } => {
            let cwd = std::env::current_dir()?;
            let config = RunConfig::load(cli.config.as_deref())?;
            commands::run_fix(&cwd, &config, &scan, &allow, dry_run)
        }
    }
}
