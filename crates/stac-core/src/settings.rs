//! Tool settings
//!
//! Read from an optional `stac-catalog.toml` at the repository root. Every
//! key has a default, so the file only needs the values that differ.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stac_fs::{ConfigStore, LayoutName, NormalizedPath};

use crate::Result;

/// Settings for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Datasets root, relative to the repository root
    pub datasets_dir: String,
    /// Documentation file holding the dataset section
    pub readme: String,
    /// Host serving raw repository files
    pub raw_host: String,
    /// Heading line that opens the regenerated section
    pub section_heading: String,
    /// Git remote used to derive owner and repository
    pub remote: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            datasets_dir: LayoutName::DatasetsDir.as_str().to_string(),
            readme: LayoutName::Readme.as_str().to_string(),
            raw_host: "raw.githubusercontent.com".to_string(),
            section_heading: "## Datasets".to_string(),
            remote: "origin".to_string(),
        }
    }
}

impl Settings {
    /// Load settings for the repository at `repo_root`.
    ///
    /// A missing settings file yields defaults; an unparsable one is an error.
    pub fn load(repo_root: &Path) -> Result<Self> {
        let path = NormalizedPath::new(repo_root.join(LayoutName::SettingsFile.as_str()));
        Ok(ConfigStore::new().load_or_default(&path)?)
    }

    pub fn datasets_root(&self, repo_root: &Path) -> PathBuf {
        repo_root.join(&self.datasets_dir)
    }

    pub fn readme_path(&self, repo_root: &Path) -> PathBuf {
        repo_root.join(&self.readme)
    }
}
