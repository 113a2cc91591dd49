//! [`TestTree`] builder for `datasets/source/collection/dataset` layouts.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary repository checkout with helpers to lay out datasets.
///
/// All relative paths are relative to the repository root; datasets live
/// under `datasets/`.
///
/// # Example
///
/// ```rust,no_run
/// use stac_test_utils::TestTree;
///
/// let tree = TestTree::new();
/// tree.add_dataset("noaa", "goes", "abi", r#"{"links": []}"#);
/// tree.add_collection_config("noaa", "goes", "collection.json", r#"{"title": "GOES"}"#);
/// assert!(tree.exists("datasets/noaa/goes/abi/catalog.json"));
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary repository root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root path of the temporary repository.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Default datasets root (`<root>/datasets`).
    pub fn datasets_root(&self) -> PathBuf {
        self.root().join("datasets")
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("failed to create {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
        path
    }

    /// Create the directory `relative` and its parents.
    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("failed to create {}: {e}", path.display()));
        path
    }

    /// Read `relative` as UTF-8.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, relative: &str) -> String {
        let path = self.root().join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("could not read {}: {e}", path.display()))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.root().join(relative).exists()
    }

    /// Create a dataset with the given `catalog.json` content.
    ///
    /// Returns the path of the dataset catalog.
    pub fn add_dataset(&self, source: &str, collection: &str, dataset: &str, catalog: &str) -> PathBuf {
        self.write(
            &format!("datasets/{source}/{collection}/{dataset}/catalog.json"),
            catalog,
        )
    }

    /// Write a file into a collection's `config/` directory.
    pub fn add_collection_config(
        &self,
        source: &str,
        collection: &str,
        file_name: &str,
        content: &str,
    ) -> PathBuf {
        self.write(
            &format!("datasets/{source}/{collection}/config/{file_name}"),
            content,
        )
    }
}
