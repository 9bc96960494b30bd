//! One-shot lyrics lookup from the terminal.

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::http;
use crate::lyrics::{self, ProviderId, ProviderResult, Query};
use crate::server::response::LyricsBody;

/// Resolve lyrics once and print the JSON body the server would send.
///
/// Not-found is an error so the exit status reflects it.
pub fn cmd_lyrics(
    rt: &Runtime,
    config: &Config,
    artist: &str,
    song: &str,
    primary: ProviderId,
) -> anyhow::Result<()> {
    let query = Query::new(artist, song)?;
    let http_client = http::build_client(&config.upstream)?;
    let resolver = lyrics::build_resolver(&http_client, config);

    match rt.block_on(resolver.resolve_with_primary(primary, &query)) {
        ProviderResult::Found { provider, payload } => {
            let body = LyricsBody::new(provider, &payload);
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        ProviderResult::NotFound { attempted } => {
            anyhow::bail!(
                "No lyrics found ({} + fallbacks), tried {}",
                attempted.primary(),
                attempted
            )
        }
    }
}
