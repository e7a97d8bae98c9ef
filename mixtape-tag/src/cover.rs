//! Thumbnail normalization: probe saved thumbnails, canonicalize to `.jpg`, square resize.

use crate::error::Result;
use image::ImageReader;
use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};

/// Thumbnail extensions yt-dlp may produce, in probe order.
pub const THUMBNAIL_EXTENSIONS: [&str; 3] = ["jpg", "png", "webp"];

/// Square cover edge in pixels.
pub const COVER_EDGE: u32 = 500;

/// Rename the first `<stem>.{jpg,png,webp}` found in `dir` to the canonical
/// `<stem>.jpg` and return its path.
///
/// Returns `Ok(None)` when no candidate exists, e.g. when the downloader skipped
/// the thumbnail or sanitized the title on disk. Only the name changes here; the
/// bytes may still be PNG or WebP until [`resize_cover`] re-encodes them.
pub fn normalize_thumbnail(dir: &Path, stem: &str) -> Result<Option<PathBuf>> {
    let canonical = dir.join(format!("{stem}.jpg"));

    for ext in THUMBNAIL_EXTENSIONS {
        let candidate = dir.join(format!("{stem}.{ext}"));
        if candidate.exists() {
            if candidate != canonical {
                fs::rename(&candidate, &canonical)?;
            }
            return Ok(Some(canonical));
        }
    }

    Ok(None)
}

/// Decode the cover, resize to exactly [`COVER_EDGE`] squared, and re-encode as
/// JPEG in place.
///
/// The format is sniffed from the bytes rather than the extension, since the file
/// may hold PNG or WebP data under the `.jpg` name. The aspect ratio is not
/// preserved; covers are forced square.
pub fn resize_cover(path: &Path) -> Result<()> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;

    let resized = img.resize_exact(COVER_EDGE, COVER_EDGE, FilterType::Lanczos3);

    // JPEG has no alpha channel
    resized.to_rgb8().save(path)?;

    Ok(())
}
