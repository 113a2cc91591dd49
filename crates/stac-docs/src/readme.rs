//! README regeneration

use std::path::Path;

use similar::TextDiff;
use stac_core::RawUrlBuilder;
use stac_fs::checksum::compute_content_checksum;
use stac_fs::{NormalizedPath, io};

use crate::Result;
use crate::listing::DatasetListing;
use crate::render::render_listing;
use crate::section::{HeadingMatcher, join_lines, split_lines, splice_section};

/// Whether [`update_readme`] touches the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Write the document when its content changes
    Write,
    /// Compute the change and a diff, leave the file alone
    Preview,
}

/// Outcome of one regeneration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeReport {
    pub path: NormalizedPath,
    /// Datasets listed in the regenerated section
    pub dataset_count: usize,
    /// Whether an existing section was replaced rather than appended
    pub section_found: bool,
    /// Whether the regenerated document differs from the one on disk
    pub changed: bool,
    /// Unified diff of the change, in preview mode only
    pub diff: Option<String>,
}

/// Regenerate the dataset section of the document at `path`.
///
/// A missing document is treated as empty. In [`UpdateMode::Write`] the file
/// is only rewritten when its content changes.
pub fn update_readme(
    path: &Path,
    listing: &DatasetListing,
    urls: &RawUrlBuilder,
    matcher: &HeadingMatcher,
    mode: UpdateMode,
) -> Result<ReadmeReport> {
    let path = NormalizedPath::new(path);
    let original = io::read_text_if_exists(&path)?.unwrap_or_default();

    let lines = split_lines(&original);
    let span = matcher.locate(&lines);
    let section_found = span.is_some();
    let section = render_listing(listing, matcher, urls);
    let updated = join_lines(&splice_section(&lines, span, &section));

    let changed = compute_content_checksum(&original) != compute_content_checksum(&updated);
    tracing::debug!(path = %path, changed, section_found, "Regenerated dataset section");

    let diff = match mode {
        UpdateMode::Preview => Some(unified_diff(&path, &original, &updated)),
        UpdateMode::Write => {
            if changed {
                io::write_text(&path, &updated)?;
                tracing::info!(path = %path, datasets = listing.dataset_count(), "Updated README");
            }
            None
        }
    };

    Ok(ReadmeReport {
        path,
        dataset_count: listing.dataset_count(),
        section_found,
        changed,
        diff,
    })
}

fn unified_diff(path: &NormalizedPath, before: &str, after: &str) -> String {
    let name = path.file_name().unwrap_or(path.as_str());
    let (old_header, new_header) = (format!("a/{name}"), format!("b/{name}"));
    let diff = TextDiff::from_lines(before, after);
    let mut unified = diff.unified_diff();
    unified.context_radius(3).header(&old_header, &new_header);
    unified.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stac_core::RepoCoordinates;
    use stac_test_utils::TestTree;

    fn fixture() -> (TestTree, DatasetListing, RawUrlBuilder) {
        let tree = TestTree::new();
        tree.add_dataset("noaa", "goes", "abi", r#"{"links": [{"rel": "item"}]}"#);
        let listing = DatasetListing::collect(&tree.datasets_root());
        let urls = RawUrlBuilder::new(
            "raw.githubusercontent.com",
            RepoCoordinates::new("acme", "data", "main"),
            tree.root(),
        );
        (tree, listing, urls)
    }

    #[test]
    fn creates_missing_readme() {
        let (tree, listing, urls) = fixture();
        let path = tree.root().join("README.md");

        let report =
            update_readme(&path, &listing, &urls, &HeadingMatcher::default(), UpdateMode::Write).unwrap();

        assert!(report.changed);
        assert!(!report.section_found);
        assert_eq!(report.dataset_count, 1);
        assert!(tree.read("README.md").starts_with("## Datasets\n\n### noaa\n"));
    }

    #[test]
    fn second_run_is_unchanged() {
        let (tree, listing, urls) = fixture();
        tree.write("README.md", "# Project\n\n## Datasets\nstale\n\n## License\nMIT\n");
        let path = tree.root().join("README.md");
        let matcher = HeadingMatcher::default();

        let first = update_readme(&path, &listing, &urls, &matcher, UpdateMode::Write).unwrap();
        let after_first = tree.read("README.md");
        let second = update_readme(&path, &listing, &urls, &matcher, UpdateMode::Write).unwrap();

        assert!(first.changed);
        assert!(first.section_found);
        assert!(!second.changed);
        assert_eq!(tree.read("README.md"), after_first);
        assert!(after_first.starts_with("# Project\n\n## Datasets\n"));
        assert!(after_first.ends_with("\n## License\nMIT\n"));
        assert!(!after_first.contains("stale"));
    }

    #[test]
    fn preview_leaves_file_untouched() {
        let (tree, listing, urls) = fixture();
        tree.write("README.md", "# Project\n");
        let path = tree.root().join("README.md");

        let report =
            update_readme(&path, &listing, &urls, &HeadingMatcher::default(), UpdateMode::Preview).unwrap();

        assert!(report.changed);
        assert_eq!(tree.read("README.md"), "# Project\n");
        let diff = report.diff.unwrap();
        assert!(diff.starts_with("--- a/README.md\n+++ b/README.md\n"));
        assert!(diff.contains("+## Datasets\n"));
    }

    #[test]
    fn preview_of_current_document_has_empty_diff() {
        let (tree, listing, urls) = fixture();
        let path = tree.root().join("README.md");
        let matcher = HeadingMatcher::default();
        update_readme(&path, &listing, &urls, &matcher, UpdateMode::Write).unwrap();

        let report = update_readme(&path, &listing, &urls, &matcher, UpdateMode::Preview).unwrap();
        assert!(!report.changed);
        assert_eq!(report.diff.as_deref(), Some(""));
    }
}
