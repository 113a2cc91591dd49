//! Grouped view of the dataset tree used to render the documentation section

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use stac_core::{
    CollectionConfigFiles, DatasetMetadata, aggregate, dataset_config_document,
    resolve_config_files, scan_datasets,
};

/// One documented dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub name: String,
    pub metadata: DatasetMetadata,
    pub catalog_path: PathBuf,
}

/// One collection with its configuration files and datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionListing {
    pub config_files: CollectionConfigFiles,
    /// Datasets keyed by name
    pub datasets: BTreeMap<String, DatasetSummary>,
}

/// Datasets grouped by source, then collection, each level ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetListing {
    sources: BTreeMap<String, BTreeMap<String, CollectionListing>>,
}

impl DatasetListing {
    /// Scan `datasets_root` and aggregate metadata for every visible dataset.
    ///
    /// Collections without a qualifying dataset do not appear.
    pub fn collect(datasets_root: &Path) -> Self {
        let mut listing = Self::default();
        for location in scan_datasets(datasets_root) {
            let config = dataset_config_document(&location.path, &location.collection_path);
            let catalog_path = location.catalog_path();
            let metadata = aggregate(config.as_deref(), &catalog_path);
            tracing::debug!(
                source = %location.source,
                collection = %location.collection,
                dataset = %location.dataset,
                items = metadata.item_count,
                "Collected dataset"
            );

            let collection = listing
                .sources
                .entry(location.source)
                .or_default()
                .entry(location.collection)
                .or_insert_with(|| CollectionListing {
                    config_files: resolve_config_files(&location.collection_path),
                    datasets: BTreeMap::new(),
                });
            collection.datasets.insert(
                location.dataset.clone(),
                DatasetSummary {
                    name: location.dataset,
                    metadata,
                    catalog_path,
                },
            );
        }
        listing
    }

    /// Add a dataset by hand, creating its source and collection as needed.
    pub fn insert(
        &mut self,
        source: &str,
        collection: &str,
        collection_path: &Path,
        dataset: DatasetSummary,
    ) {
        self.sources
            .entry(source.to_string())
            .or_default()
            .entry(collection.to_string())
            .or_insert_with(|| CollectionListing {
                config_files: resolve_config_files(collection_path),
                datasets: BTreeMap::new(),
            })
            .datasets
            .insert(dataset.name.clone(), dataset);
    }

    /// Sources in name order, each with its collections in name order.
    pub fn sources(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, CollectionListing>)> {
        self.sources
            .iter()
            .map(|(name, collections)| (name.as_str(), collections))
    }

    pub fn collection(&self, source: &str, collection: &str) -> Option<&CollectionListing> {
        self.sources.get(source)?.get(collection)
    }

    pub fn dataset_count(&self) -> usize {
        self.sources
            .values()
            .flat_map(BTreeMap::values)
            .map(|collection| collection.datasets.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
