use super::{Context, Status};
use crate::console::Console;
use crate::display::format_private_key;
use crate::model::DeploymentConfig;
use anyhow::{Context as _, Result};
use std::io::Write;

pub fn show_file<W: Write, E: Write>(ctx: &Context, console: &mut Console<W, E>) -> Result<Status> {
    let path = ctx.store.path();

    if !ctx.store.exists() {
        console.line(&format!("No configuration file found at {}", path.display()))?;
        console.blank()?;
        console.line("Run \"wormhole wizard\" to create a new configuration.")?;
        return Ok(Status::Success);
    }

    let config = masked(ctx.store.read()?);
    let json = serde_json::to_string_pretty(&config).context("Failed to render configuration")?;

    console.line(&format!("Configuration from {}:", path.display()))?;
    console.blank()?;
    console.raw(&json)?;
    Ok(Status::Success)
}

/// Copy of `config` with every private key shortened for display.
pub fn masked(mut config: DeploymentConfig) -> DeploymentConfig {
    for section in [&mut config.mainnet, &mut config.testnet, &mut config.devnet] {
        for chain in section.values_mut() {
            if let Some(key) = chain.private_key.as_mut().filter(|k| !k.is_empty()) {
                *key = format_private_key(key);
            }
        }
    }
    config
}
