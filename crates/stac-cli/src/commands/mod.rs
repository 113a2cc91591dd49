//! Command implementations for stac-cli

pub mod catalogs;
pub mod readme;

pub use catalogs::run_catalogs;
pub use readme::{LinkOverrides, run_readme};
