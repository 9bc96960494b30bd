//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `serve`: run the HTTP gateway
//! - `lyrics`: one-shot lyrics lookup

mod lyrics;
mod serve;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

pub use lyrics::cmd_lyrics;
pub use serve::cmd_serve;

use crate::config::{self, Config};
use crate::lyrics::ProviderId;

/// Chromax music metadata gateway
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/chromax/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, env = "PORT", global = true)]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, global = true)]
    pub bind: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP gateway (default)
    Serve,
    /// Look up lyrics once and print the JSON result
    Lyrics {
        artist: String,
        song: String,
        /// Provider to try first: ovh, dr or lrclib
        #[arg(long, default_value = "ovh")]
        primary: ProviderId,
    },
}

/// Run the selected command (the server when none is given).
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let rt = Runtime::new()?;

    match &cli.command {
        None | Some(Commands::Serve) => cmd_serve(&rt, &config),
        Some(Commands::Lyrics {
            artist,
            song,
            primary,
        }) => cmd_lyrics(&rt, &config, artist, song, *primary),
    }
}

/// Config file, then command-line overrides.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => config::load(),
    };

    let config = config.with_overrides(cli.port, cli.bind.as_deref());
    config.validate()?;
    Ok(config)
}
