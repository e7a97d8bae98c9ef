//! yt-dlp command line wrappers.
//!
//! Type-safe construction of [yt-dlp](https://github.com/yt-dlp/yt-dlp) invocations:
//! options render to command line flags, the download runs as a blocking subprocess,
//! and metadata comes back as the info JSON from `--dump-single-json`.
//!
//! ```no_run
//! use mixtape_dl::{dl::download, presets::DownloadPreset};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let info = download("https://youtube.com/watch?v=example", DownloadPreset::Mp3Audio.into())?;
//! println!("Downloaded: {}", info.title);
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::process::{Command, Stdio};

/// Downloader binary expected on PATH.
pub const YTDLP_BIN: &str = "yt-dlp";

/// Download directories keyed by yt-dlp path type: `home`, `temp`.
///
/// Rendered as `-P key:dir` flags. BTreeMap keeps the flag order stable.
#[derive(Clone, Debug, Default)]
pub struct OutputPaths(pub Option<BTreeMap<String, String>>);

impl OutputPaths {
    /// Create with home and temp directories.
    pub fn simple(home: &Path, temp: &Path) -> Self {
        Self::default().with_home(home).with_temp(temp)
    }

    pub fn with_home(self, home: &Path) -> Self {
        self.with_key("home".to_string(), home)
    }

    pub fn with_temp(self, temp: &Path) -> Self {
        self.with_key("temp".to_string(), temp)
    }

    fn with_key(self, key: String, value: &Path) -> Self {
        let mut inner = self.0.unwrap_or_default();
        inner.insert(key, value.to_string_lossy().to_string());
        Self(Some(inner))
    }

    fn extend_args(&self, args: &mut Vec<String>) {
        if let Some(inner) = &self.0 {
            for (key, dir) in inner {
                args.push("-P".to_string());
                args.push(format!("{key}:{dir}"));
            }
        }
    }
}

/// Post-download encode step, rendered to yt-dlp post-processing flags.
#[derive(Clone, Debug)]
pub enum PostProcessing {
    /// `--extract-audio --audio-format <codec> --audio-quality <N>K`
    ExtractAudio { codec: String, bitrate_kbps: u32 },

    /// `--merge-output-format <container>`
    MergeContainer { container: String },
}

impl PostProcessing {
    fn extend_args(&self, args: &mut Vec<String>) {
        match self {
            Self::ExtractAudio {
                codec,
                bitrate_kbps,
            } => {
                args.push("--extract-audio".to_string());
                args.push("--audio-format".to_string());
                args.push(codec.clone());
                args.push("--audio-quality".to_string());
                args.push(format!("{bitrate_kbps}K"));
            }
            Self::MergeContainer { container } => {
                args.push("--merge-output-format".to_string());
                args.push(container.clone());
            }
        }
    }
}

/// yt-dlp download configuration rendered to command line flags.
#[derive(Clone, Debug, Default)]
pub struct DownloadOptions {
    /// Format selector passed as `-f`
    pub format: Option<String>,
    /// Download directories passed as `-P`
    pub paths: Option<OutputPaths>,
    /// Filename template using `%(field)s` syntax, passed as `-o`
    pub output_template: Option<String>,
    /// Encode steps applied after the download
    pub postprocessing: Vec<PostProcessing>,
    /// Save the media thumbnail next to the output file
    pub write_thumbnail: bool,
    /// Download a single media item even for playlist URLs
    pub no_playlist: bool,
    /// Overwrite existing output files instead of skipping them
    pub force_overwrites: bool,
    /// Suppress yt-dlp output; when false the progress bar is kept
    pub quiet: bool,
    /// Silence yt-dlp warnings
    pub no_warnings: bool,
}

impl DownloadOptions {
    /// Render to yt-dlp command line flags. The URL and the JSON-mode flags
    /// added by [`download`] are not included.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(format) = &self.format {
            args.push("-f".to_string());
            args.push(format.clone());
        }

        if let Some(paths) = &self.paths {
            paths.extend_args(&mut args);
        }

        if let Some(template) = &self.output_template {
            args.push("-o".to_string());
            args.push(template.clone());
        }

        for step in &self.postprocessing {
            step.extend_args(&mut args);
        }

        if self.write_thumbnail {
            args.push("--write-thumbnail".to_string());
        }

        if self.no_playlist {
            args.push("--no-playlist".to_string());
        }

        if self.force_overwrites {
            args.push("--force-overwrites".to_string());
        }

        if self.quiet {
            args.push("--quiet".to_string());
        } else {
            // JSON mode implies quiet; --progress restores the bar on stderr
            args.push("--progress".to_string());
        }

        if self.no_warnings {
            args.push("--no-warnings".to_string());
        }

        args
    }
}

/// Essential metadata from the yt-dlp info JSON.
///
/// Unknown fields are ignored; only fields the pipelines need are kept.
#[derive(Clone, Debug, Deserialize)]
pub struct DownloadInfo {
    /// Media identifier (required by yt-dlp)
    pub id: String,
    /// Media title (required by yt-dlp)
    pub title: String,
    /// Extractor name (e.g., "Youtube")
    pub extractor_key: Option<String>,
    /// Full name of the media uploader
    pub uploader: Option<String>,
    /// Nickname or ID of the media uploader
    pub uploader_id: Option<String>,
    /// Length of the media in seconds
    pub duration: Option<f64>,
    /// URL to the media webpage
    pub webpage_url: Option<String>,
}

/// Download a single URL and return the parsed info JSON.
///
/// Runs `yt-dlp <flags> --no-simulate --dump-single-json -- <url>` so the download
/// and the metadata come from one invocation. stdout carries the JSON; stderr is
/// inherited so yt-dlp's own progress output reaches the terminal.
pub fn download(url: &str, opts: DownloadOptions) -> Result<DownloadInfo> {
    let mut command = Command::new(YTDLP_BIN);
    command
        .args(opts.to_args())
        .arg("--no-simulate")
        .arg("--dump-single-json")
        .arg("--")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());

    tracing::debug!(?command, "running yt-dlp");

    let output = command.output().map_err(|source| Error::Launch {
        program: YTDLP_BIN,
        source,
    })?;

    if !output.status.success() {
        return Err(Error::Failed {
            program: YTDLP_BIN,
            status: output.status,
        });
    }

    let info: DownloadInfo = serde_json::from_slice(&output.stdout)?;

    tracing::debug!(id = info.id, title = info.title, "download finished");

    Ok(info)
}
