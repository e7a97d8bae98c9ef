//! Error types for mixtape-tag cover and tagging operations.

use thiserror::Error;

/// Cover and tagging error variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Image decode, resize, or encode failure
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// ID3 tag read or write failure
    #[error(transparent)]
    Id3(#[from] id3::Error),

    /// IO error while probing, renaming, or reading files
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for mixtape-tag operations.
pub type Result<T> = std::result::Result<T, Error>;
