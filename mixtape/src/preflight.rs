//! External tool checks that run once at startup, before any prompt.

use color_eyre::Section;
use eyre::{Result, eyre};
use mixtape_dl::dl::YTDLP_BIN;
use std::process::{Command, Stdio};

/// Encoder binary; yt-dlp drives it for MP3 extraction and MP4 muxing.
const FFMPEG_BIN: &str = "ffmpeg";

/// Verify that yt-dlp and ffmpeg can run.
pub fn ensure_tools() -> Result<()> {
    probe(YTDLP_BIN, "--version")
        .suggestion("install yt-dlp: https://github.com/yt-dlp/yt-dlp/wiki/Installation")?;

    probe(FFMPEG_BIN, "-version").suggestion(
        "Linux: sudo apt install ffmpeg | Mac: brew install ffmpeg | \
         Windows: download from https://ffmpeg.org/",
    )?;

    Ok(())
}

/// Run `<program> <version_flag>`, discarding all output.
fn probe(program: &str, version_flag: &str) -> Result<()> {
    let status = Command::new(program)
        .arg(version_flag)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(eyre!("{program} is installed but failed its version check ({status})")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(eyre!("{program} not found on PATH"))
        }
        Err(e) => Err(eyre!(e).wrap_err(format!("failed to run {program}"))),
    }
}
