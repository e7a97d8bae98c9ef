//! Interactive menu mode - numbered choices read from standard input.

use crate::{audio, config, ui, video};
use eyre::Result;
use std::path::PathBuf;

/// Menu actions offered by the main loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Audio,
    Video,
    Exit,
}

/// Map a menu line to a selection. Surrounding whitespace is tolerated;
/// anything but exactly `1`, `2`, or `3` is rejected.
pub fn parse_selection(input: &str) -> Option<Selection> {
    match input.trim() {
        "1" => Some(Selection::Audio),
        "2" => Some(Selection::Video),
        "3" => Some(Selection::Exit),
        _ => None,
    }
}

fn banner() {
    ui::header("mixtape");
    println!("  1. Download audio (MP3 with cover art)");
    println!("  2. Download video (MP4)");
    println!("  3. Exit");
    println!();
}

/// Run the menu loop until the user exits.
///
/// Pipeline failures are reported and the menu continues; only prompt I/O
/// failures abort the loop.
pub fn run(output: Option<PathBuf>) -> Result<()> {
    // Resolved once; every iteration downloads into the same directory
    let target_dir = config::resolve_target_dir(output)?;

    loop {
        banner();

        let choice = ui::input("Enter a choice (1-3)")?;
        let Some(selection) = parse_selection(&choice) else {
            ui::error("invalid choice, enter 1, 2, or 3");
            continue;
        };

        let result = match selection {
            Selection::Exit => break,
            Selection::Audio => {
                let url = ui::input("YouTube URL")?;
                audio::execute(audio::Config {
                    url,
                    target_dir: target_dir.clone(),
                })
            }
            Selection::Video => {
                let url = ui::input("YouTube URL")?;
                video::execute(video::Config {
                    url,
                    target_dir: target_dir.clone(),
                })
            }
        };

        if let Err(report) = result {
            ui::error(&format!("{report:#}"));
        }
    }

    ui::info("goodbye");

    Ok(())
}
