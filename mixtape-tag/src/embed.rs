//! ID3v2 tag writing: front cover picture, title, artist.

use crate::error::Result;
use id3::frame::{Picture, PictureType};
use id3::{ErrorKind, Tag, TagLike, Version};
use std::fs;
use std::path::Path;

/// MIME type written for embedded covers; covers are normalized to JPEG first.
const COVER_MIME: &str = "image/jpeg";

/// Description text carried by the cover frame.
const COVER_DESCRIPTION: &str = "Cover";

/// Read the existing ID3 tag, or start a fresh one for files without any.
///
/// Files with a tag keep all frames not overwritten by [`embed_cover`].
fn read_or_new(path: &Path) -> Result<Tag> {
    match Tag::read_from_path(path) {
        Ok(tag) => Ok(tag),
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => Ok(Tag::new()),
        Err(e) => Err(e.into()),
    }
}

/// Embed the cover image and the basic text frames into an MP3, writing ID3v2.4.
///
/// Replaces any previous front cover, so repeated runs keep exactly one front-cover
/// picture frame.
pub fn embed_cover(mp3: &Path, cover: &Path, title: &str, artist: &str) -> Result<()> {
    let data = fs::read(cover)?;

    let mut tag = read_or_new(mp3)?;

    // add_frame replaces any existing picture of the same type
    tag.add_frame(Picture {
        mime_type: COVER_MIME.to_string(),
        picture_type: PictureType::CoverFront,
        description: COVER_DESCRIPTION.to_string(),
        data,
    });
    tag.set_title(title);
    tag.set_artist(artist);

    tag.write_to_path(mp3, Version::Id3v24)?;

    Ok(())
}
