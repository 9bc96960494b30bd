//! Chromax - a music metadata gateway.
//!
//! Serves lyrics (with ordered provider fallback), cover art, Internet
//! Archive MP3 links and Deezer catalog data over a small HTTP API. It can
//! also run a single lyrics lookup from the command line.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod lyrics;
pub mod media;
pub mod server;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chromax=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();

    cli::run_command(&args)
}
