//! Audio subcommand - download a track as MP3 with embedded cover art.

use crate::{config, ui};
use eyre::{Context, Result};
use mixtape_dl::dl::{DownloadOptions, OutputPaths, download};
use mixtape_dl::presets::DownloadPreset;
use mixtape_tag::{cover, embed};
use std::path::{Path, PathBuf};

/// Artist written when the source reports no uploader.
const FALLBACK_ARTIST: &str = "Unknown Artist";

/// CLI arguments for an audio download.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// URL to download
    pub url: String,

    /// Output directory (default: system download directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Resolved configuration for an audio download.
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
    tracing::info!(url = config.url, dir = ?config.target_dir.display(), "downloading audio");

    let mut opts: DownloadOptions = DownloadPreset::Mp3Audio.into();
    opts.paths = Some(OutputPaths::simple(&config.target_dir, &std::env::temp_dir()));

    let info = download(&config.url, opts).wrap_err("failed to download audio")?;

    tracing::debug!(id = info.id, duration = ?info.duration, "download info received");

    let audio_path = audio_output_path(&config.target_dir, &info.title);

    // yt-dlp may sanitize the title on disk; art and tags are skipped then
    match cover::normalize_thumbnail(&config.target_dir, &info.title)
        .wrap_err("failed to normalize thumbnail")?
    {
        Some(art) => {
            cover::resize_cover(&art)
                .wrap_err_with(|| format!("failed to resize cover: {:?}", art.display()))?;

            if audio_path.exists() {
                let artist = info.uploader.as_deref().unwrap_or(FALLBACK_ARTIST);

                // A tagging failure still leaves a playable MP3; report and move on
                if let Err(e) = embed::embed_cover(&audio_path, &art, &info.title, artist) {
                    ui::error(&format!("failed to embed cover art: {e}"));
                }
            } else {
                tracing::warn!(
                    expected = ?audio_path.display(),
                    "audio file not at the derived path, leaving it untagged"
                );
            }
        }
        None => tracing::warn!("no thumbnail found next to the audio, skipping cover art"),
    }

    ui::success(&format!("Saved {}", audio_path.display()));

    Ok(())
}

/// MP3 path derived from the reported title. Titles may contain dots, so the
/// extension is appended rather than substituted.
fn audio_output_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("{title}.mp3"))
}
