//! Idempotent Writer
//!
//! Writes a synthesized catalog as `catalog.json` inside a collection
//! directory, leaving existing files alone unless overwrite is requested.

use std::path::Path;

use stac_fs::{LayoutName, NormalizedPath, io};

use crate::{Error, Result};
use crate::catalog::CatalogDocument;

/// What happened to a target `catalog.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Bytes were written
    Written {
        path: NormalizedPath,
        /// Links written besides the self link
        child_links: usize,
    },
    /// A file already existed and overwrite was not requested
    Skipped { path: NormalizedPath },
}

impl WriteOutcome {
    pub fn path(&self) -> &NormalizedPath {
        match self {
            Self::Written { path, .. } | Self::Skipped { path } => path,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

/// Write `document` to `dir/catalog.json`.
///
/// A forced overwrite always rewrites the file, even when the content is
/// unchanged. Documents without a leading self link are refused before
/// anything touches disk. Write failures propagate.
pub fn write_catalog(dir: &Path, document: &CatalogDocument, overwrite: bool) -> Result<WriteOutcome> {
    if !document.has_self_link() {
        return Err(Error::MissingSelfLink {
            id: document.id().to_string(),
        });
    }

    let target = NormalizedPath::new(dir.join(LayoutName::CatalogFile.as_str()));

    if target.exists() && !overwrite {
        tracing::debug!(path = %target, "Catalog exists, skipping");
        return Ok(WriteOutcome::Skipped { path: target });
    }

    let json = document.to_json()?;
    io::write_text(&target, &json)?;

    let child_links = document.child_count();
    tracing::info!(path = %target, child_links, "Wrote collection catalog");
    Ok(WriteOutcome::Written {
        path: target,
        child_links,
    })
}
