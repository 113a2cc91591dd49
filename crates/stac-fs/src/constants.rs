//! Well-known names in a dataset repository.

use std::path::Path;

/// File and directory names the catalog layout relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutName {
    /// Catalog document present in every dataset and generated per collection
    CatalogFile,
    /// Per-collection (or per-dataset) configuration directory
    ConfigDir,
    /// Collection configuration document
    CollectionFile,
    /// Default datasets root, relative to the repository root
    DatasetsDir,
    /// Default documentation file, relative to the repository root
    Readme,
    /// Optional tool settings file at the repository root
    SettingsFile,
}

impl LayoutName {
    /// Get the string representation of the name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CatalogFile => "catalog.json",
            Self::ConfigDir => "config",
            Self::CollectionFile => "collection.json",
            Self::DatasetsDir => "datasets",
            Self::Readme => "README.md",
            Self::SettingsFile => "stac-catalog.toml",
        }
    }
}

impl AsRef<Path> for LayoutName {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for LayoutName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for LayoutName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
