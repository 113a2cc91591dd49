//! Filesystem abstraction for the STAC catalog manager
//!
//! Provides normalized path handling, atomic writes and format-agnostic
//! configuration loading.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::LayoutName;
pub use error::{Error, Result};
pub use path::NormalizedPath;
