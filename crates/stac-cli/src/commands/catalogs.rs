//! Collection catalog generation

use std::path::Path;

use colored::Colorize;
use stac_core::{Settings, WriteOutcome, generate_catalogs};

use crate::error::Result;

/// Run the catalogs command
pub fn run_catalogs(root: &Path, overwrite: bool) -> Result<()> {
    let settings = Settings::load(root)?;
    let datasets_root = settings.datasets_root(root);

    println!(
        "{} Generating collection catalogs in {}...",
        "=>".blue().bold(),
        datasets_root.display().to_string().cyan()
    );

    let report = generate_catalogs(&datasets_root, overwrite)?;
    for outcome in &report.outcomes {
        match &outcome.outcome {
            WriteOutcome::Written { path, child_links } => println!(
                "   {} {} ({} datasets)",
                "+".green(),
                path,
                child_links
            ),
            WriteOutcome::Skipped { path } => println!(
                "   {} {} (exists, use --overwrite to replace)",
                "SKIP".yellow().bold(),
                path.to_string().dimmed()
            ),
        }
    }

    println!(
        "{} Generated/updated {} collection-level catalog.json files",
        "OK".green().bold(),
        report.written_count()
    );
    Ok(())
}
