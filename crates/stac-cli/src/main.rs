//! STAC catalog manager CLI
//!
//! Generates collection-level catalogs and keeps the README dataset listing
//! in sync with the dataset tree.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{} tracing already initialized", "warning:".yellow().bold());
        }
        tracing::debug!("Verbose mode enabled");
    }

    let root = resolve_root(cli.root)?;
    match cli.command {
        Commands::Catalogs { overwrite } => commands::run_catalogs(&root, overwrite),
        Commands::Readme {
            branch,
            owner,
            repo,
            dry_run,
        } => commands::run_readme(
            &root,
            commands::LinkOverrides {
                owner,
                repository: repo,
                branch,
            },
            dry_run,
        ),
    }
}

/// Absolute repository root, so raw links can be made relative to it.
fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    dunce::canonicalize(&root).map_err(|e| {
        CliError::user(format!("Cannot open repository root '{}': {}", root.display(), e))
    })
}
