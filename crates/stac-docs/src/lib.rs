//! Dataset listing regeneration for the STAC catalog manager.
//!
//! Owns one bounded section of a markdown document (by default the
//! `## Datasets` section of `README.md`) and rewrites it from the dataset
//! tree. Everything outside the section is left byte-for-byte intact.
//!
//! ```text
//! # Project                 <- untouched
//! ## Datasets               <- start marker
//! ### noaa                  \
//! #### goes                  | regenerated
//! | Dataset | Title | ...   /
//! ## License                <- end boundary, untouched
//! ```
//!
//! When no start marker exists the section is appended to the document.

pub mod error;
pub mod listing;
pub mod readme;
pub mod render;
pub mod section;

pub use error::{Error, Result};
pub use listing::{CollectionListing, DatasetListing, DatasetSummary};
pub use readme::{ReadmeReport, UpdateMode, update_readme};
pub use render::render_listing;
pub use section::{HeadingMatcher, find_section, replace_section, splice_section};
