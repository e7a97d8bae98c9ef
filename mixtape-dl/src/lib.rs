//! Typed Rust front end for the [yt-dlp](https://github.com/yt-dlp/yt-dlp) command line tool.
//!
//! ## Modules
//!
//! - [`dl`] - Core option types, flag rendering, and the blocking download call
//! - [`presets`] - Ready-made option sets for MP3 audio and MP4 video
//! - [`error`] - Typed download errors
//!
//! ## Quick Start
//!
//! **MP3 preset** (192 kbps audio with the thumbnail saved alongside):
//! ```no_run
//! use mixtape_dl::{dl::download, presets::DownloadPreset};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let info = download("https://youtube.com/watch?v=example", DownloadPreset::Mp3Audio.into())?;
//! println!("Downloaded: {}", info.title);
//! # Ok(())
//! # }
//! ```
//!
//! **Custom configuration**:
//! ```no_run
//! use mixtape_dl::dl::{download, DownloadOptions, OutputPaths, PostProcessing};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = DownloadOptions {
//!     format: Some("bestaudio/best".to_string()),
//!     paths: Some(OutputPaths::simple(Path::new("/music"), &std::env::temp_dir())),
//!     output_template: Some("%(title)s.%(ext)s".to_string()),
//!     postprocessing: vec![PostProcessing::ExtractAudio {
//!         codec: "mp3".to_string(),
//!         bitrate_kbps: 192,
//!     }],
//!     write_thumbnail: true,
//!     no_warnings: true,
//!     ..Default::default()
//! };
//!
//! download("https://youtube.com/watch?v=example", opts)?;
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod error;
pub mod presets;
