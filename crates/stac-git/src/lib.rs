//! Git introspection for the STAC catalog manager
//!
//! Derives the `(owner, repository, branch)` triple used to build raw file
//! links from the local checkout.

pub mod error;
pub mod remote;

pub use error::{Error, Result};
pub use remote::{RemotePath, discover, parse_remote_url};
