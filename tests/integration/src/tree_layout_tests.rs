//! Tree layout edge cases across crates

use pretty_assertions::assert_eq;
use serde_json::Value;
use stac_core::{WriteOutcome, generate_catalogs, scan_datasets};
use stac_docs::DatasetListing;
use stac_test_utils::TestTree;

#[test]
fn test_only_datasets_with_catalogs_are_listed() {
    let tree = TestTree::new();
    tree.add_dataset("noaa", "goes", "abi", "{}");
    tree.mkdir("datasets/noaa/goes/no-catalog");
    tree.mkdir("datasets/noaa/goes/config");
    tree.write("datasets/noaa/goes/config/catalog.json", "{}");
    tree.add_dataset("noaa", "goes", ".hidden", "{}");
    tree.write("datasets/noaa/stray.json", "{}");

    let names: Vec<_> = scan_datasets(&tree.datasets_root())
        .map(|location| location.dataset)
        .collect();
    assert_eq!(names, vec!["abi"]);

    let listing = DatasetListing::collect(&tree.datasets_root());
    assert_eq!(listing.dataset_count(), 1);
}

#[test]
fn test_existing_catalog_survives_without_overwrite() {
    let tree = TestTree::new();
    tree.add_dataset("usgs", "landsat", "c2l2", "{}");
    tree.write("datasets/usgs/landsat/catalog.json", "{\"custom\": true}");

    let report = generate_catalogs(&tree.datasets_root(), false).unwrap();
    assert_eq!(report.written_count(), 0);
    assert_eq!(report.skipped_count(), 1);
    assert!(matches!(report.outcomes[0].outcome, WriteOutcome::Skipped { .. }));
    assert_eq!(tree.read("datasets/usgs/landsat/catalog.json"), "{\"custom\": true}");

    let report = generate_catalogs(&tree.datasets_root(), true).unwrap();
    assert_eq!(report.written_count(), 1);
    let catalog: Value = serde_json::from_str(&tree.read("datasets/usgs/landsat/catalog.json")).unwrap();
    assert_eq!(catalog["links"][1]["title"], "c2l2");
}

#[test]
fn test_dataset_config_beats_collection_config() {
    let tree = TestTree::new();
    tree.add_dataset("noaa", "goes", "abi", "{}");
    tree.add_dataset("noaa", "goes", "glm", "{}");
    tree.add_collection_config("noaa", "goes", "collection.json", r#"{"title": "Collection"}"#);
    tree.write("datasets/noaa/goes/abi/config/collection.json", r#"{"title": "ABI"}"#);

    let listing = DatasetListing::collect(&tree.datasets_root());
    let goes = listing.collection("noaa", "goes").unwrap();
    assert_eq!(goes.datasets["abi"].metadata.title, "ABI");
    assert_eq!(goes.datasets["glm"].metadata.title, "Collection");
}

#[test]
fn test_legacy_collection_file_is_used_last() {
    let tree = TestTree::new();
    tree.add_dataset("noaa", "goes", "abi", "{}");
    tree.write("datasets/noaa/goes/collection.json", r#"{"title": "Legacy"}"#);

    let listing = DatasetListing::collect(&tree.datasets_root());
    let goes = listing.collection("noaa", "goes").unwrap();
    assert_eq!(goes.datasets["abi"].metadata.title, "Legacy");
}

#[test]
fn test_malformed_documents_degrade_to_defaults() {
    let tree = TestTree::new();
    tree.add_dataset("noaa", "goes", "abi", "{not json");
    tree.add_collection_config("noaa", "goes", "collection.json", "[1, 2");

    let listing = DatasetListing::collect(&tree.datasets_root());
    let abi = &listing.collection("noaa", "goes").unwrap().datasets["abi"];
    assert_eq!(abi.metadata.title, "");
    assert!(abi.metadata.assets.is_empty());
    assert_eq!(abi.metadata.item_count, 0);
}
