//! Mixtape CLI - YouTube audio and video download tool

use clap::Parser;
use eyre::Result;
use mixtape::cli::{Cli, run};
use mixtape::preflight;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // External tools must be present before any prompt or download
    preflight::ensure_tools()?;

    run(cli)
}
