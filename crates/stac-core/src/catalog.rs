//! Catalog Synthesizer
//!
//! Builds the collection-level STAC catalog that links to each dataset's own
//! `catalog.json`. Pure construction; nothing here touches the filesystem.

use serde::{Deserialize, Serialize};

use crate::Result;

/// STAC version written into every synthesized catalog.
pub const STAC_VERSION: &str = "1.0.0";

pub const REL_SELF: &str = "self";
pub const REL_CHILD: &str = "child";

/// A link entry of a catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    /// The relative self link every synthesized catalog starts with.
    pub fn self_link() -> Self {
        Self {
            rel: REL_SELF.to_string(),
            href: "catalog.json".to_string(),
            title: None,
        }
    }

    /// A child link pointing at `<dataset>/catalog.json`.
    pub fn child(dataset: &str) -> Self {
        Self {
            rel: REL_CHILD.to_string(),
            href: format!("{dataset}/catalog.json"),
            title: Some(dataset.to_string()),
        }
    }
}

/// A STAC catalog document.
///
/// Field order matches the serialized key order. Built only through
/// [`CatalogDocument::for_collection`] or deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    stac_version: String,
    #[serde(rename = "type")]
    kind: String,
    id: String,
    title: String,
    links: Vec<Link>,
}

impl CatalogDocument {
    /// Synthesize the catalog of `source/collection` linking to `datasets`.
    ///
    /// Child links are sorted by dataset name regardless of input order.
    pub fn for_collection<I, S>(source: &str, collection: &str, datasets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<S> = datasets.into_iter().collect();
        names.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));

        let links = std::iter::once(Link::self_link())
            .chain(names.iter().map(|name| Link::child(name.as_ref())))
            .collect();

        Self {
            stac_version: STAC_VERSION.to_string(),
            kind: "Catalog".to_string(),
            id: format!("{source}-{collection}"),
            title: collection.to_string(),
            links,
        }
    }

    pub fn stac_version(&self) -> &str {
        &self.stac_version
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Whether the first link is the relative self link.
    pub fn has_self_link(&self) -> bool {
        self.links.first().is_some_and(|link| link.rel == REL_SELF)
    }

    /// Number of links other than the self link.
    pub fn child_count(&self) -> usize {
        self.links.len().saturating_sub(1)
    }

    /// Two-space indented JSON, non-ASCII kept verbatim, no trailing newline.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
