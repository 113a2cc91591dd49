//! Tree Scanner
//!
//! Walks the `source/collection/dataset` hierarchy under a datasets root.
//! Every level is sorted by name so generated artifacts are reproducible.
//! A dataset is only visible when its directory holds a `catalog.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stac_fs::LayoutName;

/// A dataset directory found at depth 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLocation {
    pub source: String,
    pub collection: String,
    pub dataset: String,
    /// Path of the dataset directory
    pub path: PathBuf,
    /// Path of the owning collection directory
    pub collection_path: PathBuf,
}

impl DatasetLocation {
    /// Path of the dataset's `catalog.json`.
    pub fn catalog_path(&self) -> PathBuf {
        self.path.join(LayoutName::CatalogFile.as_str())
    }
}

/// A collection directory found at depth 2, with its qualifying datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionLocation {
    pub source: String,
    pub collection: String,
    pub path: PathBuf,
    /// Sorted names of child datasets that publish a `catalog.json`
    pub datasets: Vec<String>,
}

/// Lazily yield every visible dataset under `root`.
///
/// Sources, collections and datasets are each visited in lexicographic order.
/// A missing root yields nothing.
pub fn scan_datasets(root: &Path) -> impl Iterator<Item = DatasetLocation> {
    sorted_subdirs(root)
        .into_iter()
        .flat_map(|(source, source_path)| {
            sorted_subdirs(&source_path)
                .into_iter()
                .flat_map(move |(collection, collection_path)| {
                    let source = source.clone();
                    dataset_dirs(&collection_path)
                        .into_iter()
                        .map(move |(dataset, path)| DatasetLocation {
                            source: source.clone(),
                            collection: collection.clone(),
                            dataset,
                            path,
                            collection_path: collection_path.clone(),
                        })
                })
        })
}

/// Lazily yield every collection under `root` with its qualifying datasets.
///
/// Collections without any qualifying dataset are still yielded (with an
/// empty `datasets` list); callers decide whether to skip them.
pub fn scan_collections(root: &Path) -> impl Iterator<Item = CollectionLocation> {
    sorted_subdirs(root)
        .into_iter()
        .flat_map(|(source, source_path)| {
            sorted_subdirs(&source_path)
                .into_iter()
                .map(move |(collection, path)| CollectionLocation {
                    source: source.clone(),
                    collection,
                    datasets: dataset_dirs(&path)
                        .into_iter()
                        .map(|(name, _)| name)
                        .collect(),
                    path,
                })
        })
}

/// Child datasets of a collection: visible, not `config`, with a catalog.
fn dataset_dirs(collection_path: &Path) -> Vec<(String, PathBuf)> {
    sorted_subdirs(collection_path)
        .into_iter()
        .filter(|(name, _)| name != LayoutName::ConfigDir.as_str())
        .filter(|(_, path)| path.join(LayoutName::CatalogFile.as_str()).is_file())
        .collect()
}

/// Non-hidden subdirectories of `dir`, sorted by name.
///
/// Names with control characters are skipped; they cannot be rendered into a
/// single markdown line.
fn sorted_subdirs(dir: &Path) -> Vec<(String, PathBuf)> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            tracing::warn!(path = %dir.display(), error = %e, "Unreadable directory, skipping");
            return Vec::new();
        }
    };

    let mut dirs: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let path = entry.path();
            if !path.is_dir() {
                return None;
            }
            match entry.file_name().into_string() {
                Ok(name) if name.starts_with('.') => None,
                Ok(name) if name.chars().any(char::is_control) => {
                    tracing::warn!(name = ?name, "Skipping directory with control characters in its name");
                    None
                }
                Ok(name) => Some((name, path)),
                Err(raw) => {
                    tracing::warn!(name = ?raw, "Skipping directory with non-UTF-8 name");
                    None
                }
            }
        })
        .collect();

    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    dirs
}
