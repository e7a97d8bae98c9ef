//! Shared configuration resolution for CLI arguments.
//!
//! Args structs (for CLI parsing) live with their subcommands; the pieces both
//! pipelines need are resolved here, once, into immutable values.

use color_eyre::Section;
use eyre::{OptionExt, Result};
use std::path::PathBuf;

/// Resolve the download target directory.
///
/// An explicit `-o` directory wins; otherwise the platform download directory
/// is used.
pub fn resolve_target_dir(output: Option<PathBuf>) -> Result<PathBuf> {
    match output {
        Some(dir) => Ok(dir),
        None => dirs::download_dir()
            .ok_or_eyre("could not locate the system download directory")
            .suggestion("pass an output directory with -o"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directory_wins() {
        let dir = resolve_target_dir(Some(PathBuf::from("/tmp/music"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/music"));
    }
}
