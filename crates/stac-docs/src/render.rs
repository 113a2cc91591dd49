//! Markdown rendering of a [`DatasetListing`]

use std::path::Path;

use stac_core::{CollectionConfigFiles, RawUrlBuilder};
use stac_fs::LayoutName;

use crate::listing::{CollectionListing, DatasetListing, DatasetSummary};
use crate::section::HeadingMatcher;

const TABLE_HEADER: &str = "| Dataset | Title | # Items | Key Assets | Catalog |\n";
const TABLE_RULE: &str = "|---------|-------|--------:|------------|--------:|\n";

/// Render the full section, heading included, as terminated lines.
///
/// Sources and collections get headers one and two levels below `heading`.
pub fn render_listing(
    listing: &DatasetListing,
    heading: &HeadingMatcher,
    urls: &RawUrlBuilder,
) -> Vec<String> {
    let source_marker = "#".repeat(heading.level() + 1);
    let collection_marker = "#".repeat(heading.level() + 2);

    let mut lines = vec![format!("{}\n", heading.heading()), "\n".to_string()];
    for (source, collections) in listing.sources() {
        lines.push(format!("{source_marker} {source}\n"));
        lines.push("\n".to_string());
        for (name, collection) in collections {
            lines.push(format!("{collection_marker} {name}\n"));
            lines.push("\n".to_string());
            render_collection(&mut lines, collection, urls);
        }
    }
    lines
}

fn render_collection(lines: &mut Vec<String>, collection: &CollectionListing, urls: &RawUrlBuilder) {
    let config_links = config_links(&collection.config_files, urls);
    if !config_links.is_empty() {
        lines.push(format!("{config_links}\n"));
        lines.push("\n".to_string());
    }

    lines.push(TABLE_HEADER.to_string());
    lines.push(TABLE_RULE.to_string());
    lines.extend(
        collection
            .datasets
            .values()
            .map(|dataset| dataset_row(dataset, urls)),
    );
    lines.push("\n".to_string());
}

fn config_links(files: &CollectionConfigFiles, urls: &RawUrlBuilder) -> String {
    files
        .iter()
        .filter_map(|file| {
            let name = file.path.file_name()?.to_string_lossy();
            Some(format!("[{}]({})", name, urls.url_for(&file.path)))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn dataset_row(dataset: &DatasetSummary, urls: &RawUrlBuilder) -> String {
    let assets = dataset
        .metadata
        .assets
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "| {} | {} | {} | {} | {} |\n",
        escape_cell(&dataset.name),
        escape_cell(&dataset.metadata.title),
        dataset.metadata.item_count,
        escape_cell(&assets),
        catalog_link(&dataset.catalog_path, urls),
    )
}

fn catalog_link(path: &Path, urls: &RawUrlBuilder) -> String {
    format!("[{}]({})", LayoutName::CatalogFile, urls.url_for(path))
}

/// Keep a value inside its table cell.
fn escape_cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace('\n', " ")
}
