//! Integration tests for the mixtape CLI.

use clap::Parser;
use id3::TagLike;
use id3::frame::PictureType;
use mixtape::cli::{Cli, run};
use std::path::PathBuf;

const URL: &str = "https://youtu.be/jNQXAC9IVRw";
const TITLE: &str = "Me at the zoo";
const UPLOADER: &str = "jawed";

fn create_temp_dir(name: &str) -> PathBuf {
    let temp_dir = std::env::temp_dir().join(name);

    // Clean up previous test run
    if temp_dir.exists() {
        std::fs::remove_dir_all(&temp_dir).ok();
    }
    std::fs::create_dir_all(&temp_dir).expect("failed to create temp dir");

    temp_dir
}

#[test]
#[ignore = "network I/O and external binaries required"]
fn audio_downloads_and_tags() {
    let temp_dir = create_temp_dir("mixtape-test-audio");

    let cli = Cli::parse_from(["mixtape", "audio", URL, "-o", temp_dir.to_str().unwrap()]);

    run(cli).expect("audio pipeline failed");

    let mp3 = temp_dir.join(format!("{TITLE}.mp3"));
    assert!(mp3.exists(), "MP3 not found: {:?}", mp3.display());

    // Canonical thumbnail stays on disk next to the audio
    assert!(temp_dir.join(format!("{TITLE}.jpg")).exists());

    let tag = id3::Tag::read_from_path(&mp3).expect("MP3 has no ID3 tag");
    assert_eq!(tag.title(), Some(TITLE));
    assert_eq!(tag.artist(), Some(UPLOADER));

    let covers: Vec<_> = tag
        .pictures()
        .filter(|p| p.picture_type == PictureType::CoverFront)
        .collect();
    assert_eq!(covers.len(), 1, "expected exactly one front cover");
    assert_eq!(covers[0].mime_type, "image/jpeg");

    let art = image::load_from_memory(&covers[0].data).expect("cover does not decode");
    assert_eq!((art.width(), art.height()), (500, 500));
}

#[test]
#[ignore = "network I/O and external binaries required"]
fn video_downloads_merged_mp4() {
    let temp_dir = create_temp_dir("mixtape-test-video");

    let cli = Cli::parse_from(["mixtape", "video", URL, "-o", temp_dir.to_str().unwrap()]);

    run(cli).expect("video pipeline failed");

    let mp4 = temp_dir.join(format!("{TITLE}.mp4"));
    assert!(mp4.exists(), "MP4 not found: {:?}", mp4.display());
}
