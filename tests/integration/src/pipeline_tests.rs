//! End-to-end tests for the catalog and README pipeline
//!
//! Exercises the full flow: scan -> catalogs -> listing -> README section.

use pretty_assertions::assert_eq;
use serde_json::Value;
use stac_core::{RawUrlBuilder, Settings, generate_catalogs};
use stac_docs::{DatasetListing, HeadingMatcher, UpdateMode, update_readme};
use stac_fs::NormalizedPath;
use stac_fs::checksum::compute_file_checksum;
use stac_test_utils::TestTree;
use stac_test_utils::git::repo_with_remote;

/// A small repository with two sources, config files and a README.
fn setup_repo() -> TestTree {
    let tree = TestTree::new();
    tree.add_dataset(
        "noaa",
        "goes",
        "glm",
        r#"{"type": "FeatureCollection", "features": [{}, {}, {}]}"#,
    );
    tree.add_dataset(
        "noaa",
        "goes",
        "abi",
        r#"{"links": [{"rel": "self"}, {"rel": "item"}, {"rel": "item"}]}"#,
    );
    tree.add_collection_config(
        "noaa",
        "goes",
        "collection.json",
        r#"{"title": "GOES-R Series", "item_assets": {"cog": {"type": "image/tiff; application=geotiff"}}}"#,
    );
    tree.add_collection_config("noaa", "goes", "tile_settings_configuration.json", "{}");
    tree.add_dataset("esa", "sentinel-2", "l2a", r#"{"links": [{"rel": "item"}]}"#);
    tree.write(
        "datasets/esa/sentinel-2/l2a/config/collection.json",
        r#"{"properties": {"title": "Sentinel-2 L2A"}, "assets": {"B04": "image/jp2"}}"#,
    );
    tree.write(
        "README.md",
        "# Earth data\n\nIntro.\n\n## Datasets\n\nstale listing\n\n## License\n\nCC-BY-4.0\n",
    );
    repo_with_remote(tree.root(), "https://github.com/acme/earth-data.git", "main");
    tree
}

fn run_pipeline(tree: &TestTree, mode: UpdateMode) -> stac_docs::ReadmeReport {
    let settings = Settings::load(tree.root()).unwrap();
    let coordinates = stac_git::discover(tree.root(), &settings.remote, None).unwrap();
    let urls = RawUrlBuilder::new(settings.raw_host.clone(), coordinates, tree.root());
    let matcher = HeadingMatcher::new(&settings.section_heading).unwrap();

    generate_catalogs(&settings.datasets_root(tree.root()), false).unwrap();
    let listing = DatasetListing::collect(&settings.datasets_root(tree.root()));
    update_readme(&settings.readme_path(tree.root()), &listing, &urls, &matcher, mode).unwrap()
}

#[test]
fn test_full_pipeline() {
    let tree = setup_repo();
    let report = run_pipeline(&tree, UpdateMode::Write);

    assert!(report.changed);
    assert!(report.section_found);
    assert_eq!(report.dataset_count, 3);

    let catalog: Value = serde_json::from_str(&tree.read("datasets/noaa/goes/catalog.json")).unwrap();
    assert_eq!(catalog["id"], "noaa-goes");
    assert_eq!(catalog["type"], "Catalog");
    assert_eq!(catalog["links"][1]["href"], "abi/catalog.json");
    assert_eq!(catalog["links"][2]["href"], "glm/catalog.json");

    let base = "https://raw.githubusercontent.com/acme/earth-data/main/datasets";
    let readme = tree.read("README.md");
    let expected_goes = format!(
        "#### goes\n\n\
         [collection.json]({base}/noaa/goes/config/collection.json) \
         [mosaic_config.json]({base}/noaa/goes/config/mosaic_config.json) \
         [tile_settings_configuration.json]({base}/noaa/goes/config/tile_settings_configuration.json) \
         [render_config.json]({base}/noaa/goes/config/render_config.json)\n\n\
         | Dataset | Title | # Items | Key Assets | Catalog |\n\
         |---------|-------|--------:|------------|--------:|\n\
         | abi | GOES-R Series | 2 | cog (image/tiff; application=geotiff) | [catalog.json]({base}/noaa/goes/abi/catalog.json) |\n\
         | glm | GOES-R Series | 3 | cog (image/tiff; application=geotiff) | [catalog.json]({base}/noaa/goes/glm/catalog.json) |\n\n"
    );
    assert!(readme.contains(&expected_goes), "README was:\n{readme}");
    assert!(readme.contains("| l2a | Sentinel-2 L2A | 1 | B04 (image/jp2) |"));
    assert!(readme.find("### esa").unwrap() < readme.find("### noaa").unwrap());
    assert!(readme.starts_with("# Earth data\n\nIntro.\n\n## Datasets\n\n"));
    assert!(readme.ends_with("\n## License\n\nCC-BY-4.0\n"));
    assert!(!readme.contains("stale listing"));
}

#[test]
fn test_pipeline_is_idempotent() {
    let tree = setup_repo();
    run_pipeline(&tree, UpdateMode::Write);

    let readme = NormalizedPath::new(tree.root().join("README.md"));
    let catalog = NormalizedPath::new(tree.root().join("datasets/noaa/goes/catalog.json"));
    let readme_before = compute_file_checksum(&readme).unwrap();
    let catalog_before = compute_file_checksum(&catalog).unwrap();

    let second = run_pipeline(&tree, UpdateMode::Write);

    assert!(!second.changed);
    assert_eq!(compute_file_checksum(&readme).unwrap(), readme_before);
    assert_eq!(compute_file_checksum(&catalog).unwrap(), catalog_before);
}

#[test]
fn test_generation_is_deterministic_across_trees() {
    let first = setup_repo();
    let second = setup_repo();

    run_pipeline(&first, UpdateMode::Write);
    run_pipeline(&second, UpdateMode::Write);

    for relative in ["datasets/noaa/goes/catalog.json", "datasets/esa/sentinel-2/catalog.json"] {
        assert_eq!(first.read(relative), second.read(relative));
    }

    let base_first = first.read("README.md");
    let base_second = second.read("README.md");
    assert_eq!(base_first.lines().count(), base_second.lines().count());
    assert_eq!(base_first, base_second);
}

#[test]
fn test_preview_does_not_write_readme() {
    let tree = setup_repo();
    let before = tree.read("README.md");

    let report = run_pipeline(&tree, UpdateMode::Preview);

    assert!(report.changed);
    assert!(report.diff.unwrap().contains("-stale listing\n"));
    assert_eq!(tree.read("README.md"), before);
}
