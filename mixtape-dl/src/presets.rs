//! Download presets: MP3 audio with cover thumbnail, merged MP4 video.
//!
//! **Presets:** [`DownloadPreset::Mp3Audio`] (192 kbps MP3 + thumbnail file),
//! [`DownloadPreset::Mp4Video`] (MP4 + M4A muxed into one MP4)
//!
//! ```no_run
//! use mixtape_dl::{dl::download, presets::DownloadPreset};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! download("https://youtube.com/watch?v=example", DownloadPreset::Mp3Audio.into())?;
//! # Ok(())
//! # }
//! ```
//!
//! **Output:** `title.mp3` + `title.webp` (or `.jpg`/`.png`), or `title.mp4`, in the
//! directory set through [`DownloadOptions::paths`] (current directory when unset)

use crate::dl::{DownloadOptions, PostProcessing};

/// Fixed MP3 bitrate for audio downloads.
pub const MP3_BITRATE_KBPS: u32 = 192;

/// Best-audio selector with a fallback to the best combined stream.
pub const AUDIO_FORMAT: &str = "bestaudio/best";

/// MP4 video plus M4A audio, falling back to the best ready-made MP4.
pub const VIDEO_FORMAT: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]";

/// Bare title filename; yt-dlp fills in the extension per output file.
pub const TITLE_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Download target rendered as yt-dlp options.
#[derive(Copy, Clone, Debug, Default)]
pub enum DownloadPreset {
    /// Best audio extracted to MP3 at 192 kbps, thumbnail saved alongside
    #[default]
    Mp3Audio,
    /// MP4 video and M4A audio merged into a single MP4
    Mp4Video,
}

impl From<DownloadPreset> for DownloadOptions {
    /// Music presets: single media item, title-named files, existing files
    /// overwritten, warnings silenced. Callers point `paths` at the target
    /// directory; nothing is set here.
    fn from(preset: DownloadPreset) -> Self {
        let (format, postprocessing, write_thumbnail) = match preset {
            DownloadPreset::Mp3Audio => (
                AUDIO_FORMAT,
                vec![PostProcessing::ExtractAudio {
                    codec: "mp3".to_string(),
                    bitrate_kbps: MP3_BITRATE_KBPS,
                }],
                true,
            ),
            DownloadPreset::Mp4Video => (
                VIDEO_FORMAT,
                vec![PostProcessing::MergeContainer {
                    container: "mp4".to_string(),
                }],
                false,
            ),
        };

        Self {
            format: Some(format.to_string()),
            paths: None,
            output_template: Some(TITLE_TEMPLATE.to_string()),
            postprocessing,
            write_thumbnail,
            no_playlist: true,
            force_overwrites: true,
            quiet: false,
            no_warnings: true,
        }
    }
}
