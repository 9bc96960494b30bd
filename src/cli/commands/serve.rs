//! Run the HTTP gateway.

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::server;

pub fn cmd_serve(rt: &Runtime, config: &Config) -> anyhow::Result<()> {
    rt.block_on(server::serve(config))?;
    Ok(())
}
