//! Error types for stac-docs

/// Result type for stac-docs operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] stac_fs::Error),

    #[error(transparent)]
    Core(#[from] stac_core::Error),

    #[error("Invalid section heading '{heading}': expected a markdown header of level 1 to 4 such as '## Datasets'")]
    InvalidHeading { heading: String },
}
