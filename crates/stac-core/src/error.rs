//! Error types for stac-core

/// Result type for stac-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in stac-core operations
///
/// Per-dataset read and parse problems never show up here; they degrade to
/// default metadata inside [`crate::metadata`]. Only failures to produce an
/// artifact are reported.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error from stac-fs
    #[error(transparent)]
    Fs(#[from] stac_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A catalog document lacks its leading self link
    #[error("catalog '{id}' has no leading self link")]
    MissingSelfLink { id: String },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
