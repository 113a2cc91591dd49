//! Core engine for the STAC catalog manager
//!
//! Walks a `source/collection/dataset` tree, resolves per-collection
//! configuration files, aggregates dataset metadata and synthesizes
//! collection-level catalog documents.
//!
//! # Layout
//!
//! ```text
//! datasets/
//! └── <source>/
//!     └── <collection>/
//!         ├── catalog.json          # generated by `generate_catalogs`
//!         ├── config/               # optional role files
//!         │   ├── collection.json
//!         │   ├── mosaic_config.json
//!         │   ├── tile_settings_config.json
//!         │   └── render_config.json
//!         └── <dataset>/
//!             └── catalog.json      # required for the dataset to be visible
//! ```

pub mod catalog;
pub mod config_files;
pub mod error;
pub mod generate;
pub mod links;
pub mod metadata;
pub mod scanner;
pub mod settings;
pub mod writer;

pub use catalog::{CatalogDocument, Link};
pub use config_files::{CollectionConfigFiles, ConfigRole, ResolvedConfigFile, resolve_config_files};
pub use error::{Error, Result};
pub use generate::{CatalogRunReport, CollectionOutcome, generate_catalogs};
pub use links::{RawUrlBuilder, RepoCoordinates};
pub use metadata::{Asset, DatasetMetadata, Extracted, aggregate, dataset_config_document};
pub use scanner::{CollectionLocation, DatasetLocation, scan_collections, scan_datasets};
pub use settings::Settings;
pub use writer::{WriteOutcome, write_catalog};
