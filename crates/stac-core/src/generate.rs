//! Collection catalog generation run
//!
//! Scans every collection under a datasets root, synthesizes its catalog and
//! hands it to the writer. Collections without a qualifying dataset are left
//! alone.

use std::path::Path;

use crate::Result;
use crate::catalog::CatalogDocument;
use crate::scanner::scan_collections;
use crate::writer::{WriteOutcome, write_catalog};

/// Outcome for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionOutcome {
    pub source: String,
    pub collection: String,
    pub outcome: WriteOutcome,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogRunReport {
    pub outcomes: Vec<CollectionOutcome>,
}

impl CatalogRunReport {
    /// Number of catalogs created or updated.
    pub fn written_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_written()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.written_count()
    }
}

/// Generate `catalog.json` for every collection under `datasets_root`.
///
/// The first write failure aborts the run; catalogs written before it stay
/// on disk.
pub fn generate_catalogs(datasets_root: &Path, overwrite: bool) -> Result<CatalogRunReport> {
    let mut report = CatalogRunReport::default();

    for location in scan_collections(datasets_root) {
        if location.datasets.is_empty() {
            tracing::debug!(
                source = %location.source,
                collection = %location.collection,
                "No dataset catalogs, skipping collection"
            );
            continue;
        }

        let document =
            CatalogDocument::for_collection(&location.source, &location.collection, &location.datasets);
        let outcome = write_catalog(&location.path, &document, overwrite)?;

        report.outcomes.push(CollectionOutcome {
            source: location.source,
            collection: location.collection,
            outcome,
        });
    }

    Ok(report)
}
