//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// STAC catalog manager - Generate collection catalogs and dataset listings
#[derive(Parser, Debug)]
#[command(name = "stac")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository root (defaults to the current directory)
    #[arg(long, global = true, env = "STAC_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate a catalog.json for every collection
    ///
    /// Each catalog links to the collection's datasets in name order.
    /// Existing catalogs are kept unless --overwrite is given.
    Catalogs {
        /// Replace catalogs that already exist
        #[arg(long)]
        overwrite: bool,
    },

    /// Regenerate the dataset section of the README
    ///
    /// Owner, repository and branch not given here are read from git.
    ///
    /// Examples:
    ///   stac readme                       # Update README.md in place
    ///   stac readme --dry-run             # Show the diff only
    ///   stac readme --branch release      # Link to another branch
    Readme {
        /// Branch used in raw file links
        #[arg(long)]
        branch: Option<String>,

        /// Repository owner used in raw file links
        #[arg(long)]
        owner: Option<String>,

        /// Repository name used in raw file links
        #[arg(long)]
        repo: Option<String>,

        /// Print the change as a unified diff without writing
        #[arg(long)]
        dry_run: bool,
    },
}
