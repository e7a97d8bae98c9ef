//! Error types for mixtape-dl downloads.

use std::process::ExitStatus;
use thiserror::Error;

/// Download error variants, one per failure stage.
#[derive(Debug, Error)]
pub enum Error {
    /// The downloader binary could not be spawned
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The downloader ran but reported failure
    #[error("{program} exited with {status}")]
    Failed {
        program: &'static str,
        status: ExitStatus,
    },

    /// The info JSON on stdout could not be parsed
    #[error("failed to parse media metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Result type alias for mixtape-dl operations.
pub type Result<T> = std::result::Result<T, Error>;
