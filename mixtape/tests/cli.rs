//! Process-level CLI tests that need neither network access nor the real
//! external tools.
//!
//! The binary is spawned directly (Cargo exposes its path through
//! `CARGO_BIN_EXE_mixtape`), with `PATH` pointed at an empty directory or at
//! stub tool scripts.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_mixtape");

#[cfg(unix)]
const YTDLP_STUB: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "2026.01.01"
    exit 0
fi
echo '{"id":"jNQXAC9IVRw","title":"Me at the zoo","uploader":"jawed"}'
"#;

#[cfg(unix)]
const FFMPEG_STUB: &str = "#!/bin/sh\nexit 0\n";

fn create_temp_dir(name: &str) -> PathBuf {
    let temp_dir = std::env::temp_dir().join(name);

    // Clean up previous test run
    if temp_dir.exists() {
        fs::remove_dir_all(&temp_dir).ok();
    }
    fs::create_dir_all(&temp_dir).expect("failed to create temp dir");

    temp_dir
}

#[cfg(unix)]
fn write_stub(dir: &Path, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, body).expect("failed to write stub");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("failed to chmod stub");
}

#[test]
fn missing_tools_fail_before_any_prompt() {
    let empty = create_temp_dir("mixtape-test-empty-path");

    let output = Command::new(BIN)
        .env("PATH", &empty)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run mixtape");

    assert_eq!(output.status.code(), Some(1));

    // The banner and menu never reach stdout; the process dies in preflight
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("yt-dlp"), "stderr: {stderr}");
}

#[cfg(unix)]
#[test]
fn tagging_failure_is_printed_and_run_continues() {
    let tools = create_temp_dir("mixtape-test-stub-tools");
    write_stub(&tools, "yt-dlp", YTDLP_STUB);
    write_stub(&tools, "ffmpeg", FFMPEG_STUB);

    let target = create_temp_dir("mixtape-test-tag-failure");

    // Real image bytes for the thumbnail; a directory squatting on the MP3
    // path makes the tag write fail while download and resize succeed
    image::RgbImage::from_pixel(8, 8, image::Rgb([64, 128, 192]))
        .save_with_format(target.join("Me at the zoo.png"), image::ImageFormat::Png)
        .unwrap();
    fs::create_dir(target.join("Me at the zoo.mp3")).unwrap();

    let output = Command::new(BIN)
        .arg("audio")
        .arg("https://youtu.be/jNQXAC9IVRw")
        .arg("-o")
        .arg(&target)
        .env("PATH", &tools)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run mixtape");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // The failure is reported even with logging filtered out, and the run
    // still succeeds
    assert!(output.status.success(), "stderr: {stderr}");
    assert!(stderr.contains("failed to embed cover art"), "stderr: {stderr}");
    assert!(stdout.contains("Saved"), "stdout: {stdout}");

    // The cover itself was still normalized and resized
    assert_eq!(
        image::image_dimensions(target.join("Me at the zoo.jpg")).unwrap(),
        (500, 500)
    );
}
