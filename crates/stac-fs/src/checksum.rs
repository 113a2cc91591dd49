//! Content fingerprints
//!
//! Regenerated documents are compared by fingerprint before anything is
//! written, so an unchanged README keeps its modification time.

use sha2::{Digest, Sha256};

use crate::{Error, NormalizedPath, Result};

const ALGORITHM: &str = "sha256";

fn fingerprint(bytes: &[u8]) -> String {
    format!("{ALGORITHM}:{:x}", Sha256::digest(bytes))
}

/// `sha256:<hex>` fingerprint of in-memory text.
pub fn compute_content_checksum(content: &str) -> String {
    fingerprint(content.as_bytes())
}

/// `sha256:<hex>` fingerprint of a file on disk.
pub fn compute_file_checksum(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    std::fs::read(&native)
        .map(|bytes| fingerprint(&bytes))
        .map_err(|e| Error::io(&native, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fingerprint_of_known_text() {
        assert_eq!(
            compute_content_checksum("hello world"),
            "sha256:b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn trailing_newline_changes_fingerprint() {
        assert_ne!(
            compute_content_checksum("## Datasets"),
            compute_content_checksum("## Datasets\n")
        );
    }

    #[test]
    fn file_and_text_fingerprints_agree() {
        let dir = tempfile::tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join("README.md"));
        std::fs::write(path.to_native(), "# Data\n").unwrap();

        assert_eq!(compute_file_checksum(&path).unwrap(), compute_content_checksum("# Data\n"));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join("missing.md"));
        let err = compute_file_checksum(&path).unwrap_err();
        assert!(err.to_string().contains("missing.md"));
    }
}
