//! Metadata Aggregator
//!
//! Pulls a display title, an asset list and an item count out of a dataset's
//! configuration and catalog documents. Every extraction reads its document on
//! its own and degrades to a default instead of failing, so one broken field
//! never hides the others.

use std::fmt;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::Serialize;
use serde_json::Value;
use serde_json::value::RawValue;
use stac_fs::LayoutName;

/// Result of a best-effort extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted<T> {
    /// The value was present in the document
    Found(T),
    /// The document or field does not exist
    Missing,
    /// The document exists but could not be read or has the wrong shape
    Malformed(String),
}

impl<T> Extracted<T> {
    fn and_then<U>(self, f: impl FnOnce(T) -> Extracted<U>) -> Extracted<U> {
        match self {
            Self::Found(value) => f(value),
            Self::Missing => Extracted::Missing,
            Self::Malformed(reason) => Extracted::Malformed(reason),
        }
    }
}

impl<T: Default> Extracted<T> {
    /// The extracted value, or `T::default()` when degraded.
    pub fn value(self) -> T {
        match self {
            Self::Found(value) => value,
            Self::Missing | Self::Malformed(_) => T::default(),
        }
    }
}

/// One entry of a dataset's asset list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub name: String,
    /// Media type as declared by the configuration document (may be empty)
    #[serde(rename = "type")]
    pub media_type: String,
}

impl Asset {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.media_type)
    }
}

/// Aggregated metadata of one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetMetadata {
    pub title: String,
    pub assets: Vec<Asset>,
    pub item_count: usize,
}

/// Aggregate title, assets and item count for a dataset.
///
/// Never fails: each field falls back to its default on its own.
pub fn aggregate(config: Option<&Path>, catalog: &Path) -> DatasetMetadata {
    DatasetMetadata {
        title: degrade("title", config, extract_title(config)),
        assets: degrade("assets", config, extract_assets(config)),
        item_count: degrade("item_count", Some(catalog), count_items(catalog)),
    }
}

fn degrade<T: Default>(field: &str, path: Option<&Path>, extracted: Extracted<T>) -> T {
    if let Extracted::Malformed(reason) = &extracted {
        tracing::debug!(
            field,
            path = %path.map(|p| p.display().to_string()).unwrap_or_default(),
            reason = %reason,
            "Degraded dataset metadata"
        );
    }
    extracted.value()
}

/// Pick the configuration document describing a dataset.
///
/// Looks for `<dataset>/config/collection.json`, then
/// `<collection>/config/collection.json`, then `<collection>/collection.json`.
pub fn dataset_config_document(dataset_path: &Path, collection_path: &Path) -> Option<PathBuf> {
    let config_dir = LayoutName::ConfigDir.as_str();
    let file = LayoutName::CollectionFile.as_str();
    [
        dataset_path.join(config_dir).join(file),
        collection_path.join(config_dir).join(file),
        collection_path.join(file),
    ]
    .into_iter()
    .find(|candidate| candidate.is_file())
}

/// Title from `title`, falling back to `properties.title`.
pub fn extract_title(config: Option<&Path>) -> Extracted<String> {
    read_optional(config).and_then(|content| parse_title(&content))
}

/// Asset list from `item_assets`, falling back to `assets`.
pub fn extract_assets(config: Option<&Path>) -> Extracted<Vec<Asset>> {
    read_optional(config).and_then(|content| parse_assets(&content))
}

/// Number of `rel == "item"` links, falling back to the `features` length.
pub fn count_items(catalog: &Path) -> Extracted<usize> {
    read_document(catalog).and_then(|content| parse_item_count(&content))
}

fn read_optional(path: Option<&Path>) -> Extracted<String> {
    match path {
        Some(path) => read_document(path),
        None => Extracted::Missing,
    }
}

fn read_document(path: &Path) -> Extracted<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Extracted::Found(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Extracted::Missing,
        Err(e) => Extracted::Malformed(format!("{}: {}", path.display(), e)),
    }
}

fn parse_title(content: &str) -> Extracted<String> {
    let doc: Value = match serde_json::from_str(content) {
        Ok(doc) => doc,
        Err(e) => return Extracted::Malformed(e.to_string()),
    };

    fn non_empty(value: Option<&Value>) -> Option<&str> {
        value.and_then(Value::as_str).filter(|t| !t.is_empty())
    }
    let title = non_empty(doc.get("title"))
        .or_else(|| non_empty(doc.get("properties").and_then(|p| p.get("title"))));

    match title {
        Some(title) => Extracted::Found(title.to_string()),
        None => Extracted::Missing,
    }
}

fn parse_assets(content: &str) -> Extracted<Vec<Asset>> {
    let doc: OrderedEntries<'_> = match serde_json::from_str(content) {
        Ok(doc) => doc,
        Err(e) => return Extracted::Malformed(e.to_string()),
    };

    let item_assets = match doc.get("item_assets").filter(|raw| !is_falsy(raw)) {
        Some(raw) => match asset_mapping(raw) {
            Ok(mapping) => mapping,
            Err(reason) => return Extracted::Malformed(reason),
        },
        None => None,
    };
    let mapping = match item_assets {
        Some(entries) => Some(entries),
        None => match doc.get("assets").map(asset_mapping).transpose() {
            Ok(mapping) => mapping.flatten(),
            Err(reason) => return Extracted::Malformed(reason),
        },
    };

    match mapping {
        Some(entries) => Extracted::Found(
            entries
                .0
                .into_iter()
                .map(|(name, raw)| Asset {
                    media_type: asset_type(raw),
                    name,
                })
                .collect(),
        ),
        None => Extracted::Missing,
    }
}

/// JSON falsiness: `null`, `false`, zero, and empty strings, arrays or objects.
fn is_falsy(raw: &RawValue) -> bool {
    match serde_json::from_str::<Value>(raw.get()) {
        Ok(Value::Null) => true,
        Ok(Value::Bool(b)) => !b,
        Ok(Value::Number(n)) => n.as_f64() == Some(0.0),
        Ok(Value::String(s)) => s.is_empty(),
        Ok(Value::Array(items)) => items.is_empty(),
        Ok(Value::Object(fields)) => fields.is_empty(),
        Err(_) => false,
    }
}

/// Parse an asset mapping; `null` counts as absent.
fn asset_mapping(raw: &RawValue) -> Result<Option<OrderedEntries<'_>>, String> {
    if raw.get() == "null" {
        return Ok(None);
    }
    serde_json::from_str(raw.get())
        .map(Some)
        .map_err(|e| format!("asset mapping: {e}"))
}

fn asset_type(raw: &RawValue) -> String {
    let value: Value = match serde_json::from_str(raw.get()) {
        Ok(value) => value,
        Err(_) => return raw.get().to_string(),
    };
    match &value {
        Value::Object(fields) => fields
            .get("type")
            .or_else(|| fields.get("media_type"))
            .map(scalar_text)
            .unwrap_or_default(),
        other => scalar_text(other),
    }
}

/// String form of a JSON value: strings verbatim, `null` empty, others as JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn parse_item_count(content: &str) -> Extracted<usize> {
    let doc: Value = match serde_json::from_str(content) {
        Ok(doc) => doc,
        Err(e) => return Extracted::Malformed(e.to_string()),
    };

    if let Some(links) = doc
        .get("links")
        .and_then(Value::as_array)
        .filter(|links| !links.is_empty())
    {
        let items = links
            .iter()
            .filter(|link| link.get("rel").and_then(Value::as_str) == Some("item"))
            .count();
        return Extracted::Found(items);
    }

    match doc.get("features").and_then(Value::as_array) {
        Some(features) => Extracted::Found(features.len()),
        None => Extracted::Missing,
    }
}

/// A JSON object kept as ordered key/value pairs, duplicate keys included.
struct OrderedEntries<'a>(Vec<(String, &'a RawValue)>);

impl<'a> OrderedEntries<'a> {
    /// Value of the last occurrence of `key`, matching JSON object semantics.
    fn get(&self, key: &str) -> Option<&'a RawValue> {
        self.0.iter().rev().find(|(k, _)| k == key).map(|(_, v)| *v)
    }
}

impl<'de: 'a, 'a> Deserialize<'de> for OrderedEntries<'a> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<'a>(PhantomData<&'a ()>);

        impl<'de: 'a, 'a> Visitor<'de> for EntriesVisitor<'a> {
            type Value = OrderedEntries<'a>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, &'a RawValue>()? {
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}
