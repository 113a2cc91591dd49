//! README dataset listing regeneration

use std::path::Path;

use colored::Colorize;
use stac_core::{RawUrlBuilder, RepoCoordinates, Settings};
use stac_docs::{DatasetListing, HeadingMatcher, UpdateMode, update_readme};

use crate::error::Result;

/// Link coordinates given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOverrides {
    pub owner: Option<String>,
    pub repository: Option<String>,
    pub branch: Option<String>,
}

impl LinkOverrides {
    /// Fill in whatever was not given from the git checkout at `root`.
    ///
    /// Git is not consulted when every part is given.
    pub fn resolve(self, root: &Path, remote: &str) -> Result<RepoCoordinates> {
        if let (Some(owner), Some(repository), Some(branch)) =
            (&self.owner, &self.repository, &self.branch)
        {
            return Ok(RepoCoordinates::new(owner, repository, branch));
        }

        let discovered = stac_git::discover(root, remote, self.branch.as_deref())?;
        Ok(RepoCoordinates {
            owner: self.owner.unwrap_or(discovered.owner),
            repository: self.repository.unwrap_or(discovered.repository),
            branch: discovered.branch,
        })
    }
}

/// Run the readme command
pub fn run_readme(root: &Path, overrides: LinkOverrides, dry_run: bool) -> Result<()> {
    let settings = Settings::load(root)?;
    let coordinates = overrides.resolve(root, &settings.remote)?;
    let matcher = HeadingMatcher::new(&settings.section_heading)?;
    let urls = RawUrlBuilder::new(settings.raw_host.clone(), coordinates, root);
    let readme = settings.readme_path(root);

    println!(
        "{} Updating {} for {}/{}@{}...",
        "=>".blue().bold(),
        readme.display().to_string().cyan(),
        urls.coordinates().owner,
        urls.coordinates().repository,
        urls.coordinates().branch
    );

    let listing = DatasetListing::collect(&settings.datasets_root(root));
    let mode = if dry_run {
        UpdateMode::Preview
    } else {
        UpdateMode::Write
    };
    let report = update_readme(&readme, &listing, &urls, &matcher, mode)?;

    if !report.changed {
        println!(
            "{} {} is up to date ({} datasets).",
            "OK".green().bold(),
            report.path,
            report.dataset_count
        );
    } else if let Some(diff) = &report.diff {
        println!(
            "{} Would update {} ({} datasets):",
            "DRY-RUN".yellow().bold(),
            report.path,
            report.dataset_count
        );
        print!("{diff}");
    } else {
        let action = if report.section_found {
            "Replaced"
        } else {
            "Appended"
        };
        println!(
            "{} {} '{}' section in {} ({} datasets).",
            "OK".green().bold(),
            action,
            matcher.heading(),
            report.path,
            report.dataset_count
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stac_test_utils::git::repo_with_remote;
    use tempfile::TempDir;

    #[test]
    fn full_overrides_skip_git() {
        let temp = TempDir::new().unwrap();
        let overrides = LinkOverrides {
            owner: Some("acme".into()),
            repository: Some("data".into()),
            branch: Some("main".into()),
        };

        let coordinates = overrides.resolve(temp.path(), "origin").unwrap();

        assert_eq!(coordinates, RepoCoordinates::new("acme", "data", "main"));
    }

    #[test]
    fn partial_overrides_fill_from_git() {
        let temp = TempDir::new().unwrap();
        repo_with_remote(temp.path(), "git@github.com:acme/earth-data.git", "develop");
        let overrides = LinkOverrides {
            owner: Some("fork".into()),
            ..Default::default()
        };

        let coordinates = overrides.resolve(temp.path(), "origin").unwrap();

        assert_eq!(coordinates, RepoCoordinates::new("fork", "earth-data", "develop"));
    }

    #[test]
    fn missing_repository_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(LinkOverrides::default().resolve(temp.path(), "origin").is_err());
    }
}
