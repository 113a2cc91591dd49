//! Shared test utilities for the STAC catalog manager workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`]: [`TestTree`] builder for dataset directory trees
//! - [`git`]: git repository fixtures

pub mod git;
pub mod tree;

pub use tree::TestTree;
