//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mixtape")]
#[command(about = "Download YouTube audio as tagged MP3s or videos as MP4")]
#[command(version)]
pub struct Cli {
    /// Output directory for menu mode (default: system download directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download audio as MP3 with embedded cover art
    Audio(crate::audio::Args),

    /// Download video as a single merged MP4
    Video(crate::video::Args),
}

/// Execute CLI command - separated for testing. No subcommand runs the menu.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Some(Commands::Audio(args)) => crate::audio::execute(args.try_into()?),
        Some(Commands::Video(args)) => crate::video::execute(args.try_into()?),
        None => crate::menu::run(cli.output),
    }
}
