use super::{write_chain_details, Context, Status};
use crate::cli::SetArgs;
use crate::console::Console;
use crate::constants::{default_rpc, Chain, Environment};
use crate::model::ChainConfig;
use anyhow::Result;
use std::io::Write;
use tracing::debug;

pub fn set_chain<W: Write, E: Write>(ctx: &Context, args: &SetArgs, console: &mut Console<W, E>) -> Result<Status> {
    let chain = args.chain;
    let environment = ctx.environment(args.env);

    if !args.has_updates() {
        console.error_line("")?;
        console.error_line("Error: You must specify at least one option to set. Available options: --rpc, --private-key, --token, --mode")?;
        console.error_line("")?;
        console.error_line(&format!(
            "Example: wormhole config set {chain} --mode burning --token 0xYourTokenAddress"
        ))?;
        return Ok(Status::Failure);
    }

    let existing = ctx.store.chain(chain, environment)?.unwrap_or_default();
    let mut updates = ChainConfig::default();

    match &args.rpc {
        Some(rpc) => updates.rpc = Some(rpc.clone()),
        None if existing.rpc().is_none() => {
            updates.rpc = Some(default_rpc(chain, environment).to_string());
        }
        None => {}
    }

    if let Some(key) = &args.private_key {
        updates.private_key = Some(key.clone());
    }

    if let Some(token) = &args.token {
        if !ctx.converter.is_valid_format(token, chain) {
            console.error_line("")?;
            console.error_line(&format!(
                "Error: The token address provided is not a valid {chain} address."
            ))?;
            console.error_line("")?;
            for hint in chain.family().format_hint() {
                console.error_line(hint)?;
            }
            return Ok(Status::Failure);
        }
        updates.token_address = Some(ctx.converter.to_canonical(token, chain)?);
    }

    if let Some(mode) = args.mode {
        updates.mode = Some(mode.as_str().to_string());
    }

    let updated = ctx.store.update_chain(chain, environment, updates)?;
    debug!(%chain, %environment, "chain updated");

    console.blank()?;
    console.line(&format!("✓ Configuration updated for {chain} ({environment})"))?;
    console.blank()?;
    console.line("Current configuration:")?;
    write_chain_details(console, &updated)?;
    console.blank()?;
    console.line(&format!("Configuration saved to {}", ctx.store.path().display()))?;
    console.line("Run \"wormhole validate\" to check your configuration.")?;
    Ok(Status::Success)
}

pub fn show_chain<W: Write, E: Write>(
    ctx: &Context,
    chain: Option<Chain>,
    env: Option<Environment>,
    console: &mut Console<W, E>,
) -> Result<Status> {
    let environment = ctx.environment(env);

    if let Some(chain) = chain {
        let Some(config) = ctx.store.chain(chain, environment)? else {
            console.line(&format!("No configuration found for {chain} in {environment}"))?;
            return Ok(Status::Success);
        };
        console.line(&format!("Configuration for {chain} ({environment}):"))?;
        console.blank()?;
        write_chain_details(console, &config)?;
        return Ok(Status::Success);
    }

    let chains = ctx.store.environment(environment)?;
    if chains.is_empty() {
        console.line(&format!("No chains configured for {environment}"))?;
        return Ok(Status::Success);
    }

    console.line(&format!("Configuration for {environment}:"))?;
    console.blank()?;
    for (name, config) in &chains {
        console.line(&format!("{name}:"))?;
        write_chain_details(console, config)?;
        console.blank()?;
    }
    Ok(Status::Success)
}

pub fn list_chains<W: Write, E: Write>(
    ctx: &Context,
    env: Option<Environment>,
    console: &mut Console<W, E>,
) -> Result<Status> {
    let environment = ctx.environment(env);
    let chains = ctx.store.environment(environment)?;

    if chains.is_empty() {
        console.line(&format!("No chains configured for {environment}"))?;
        return Ok(Status::Success);
    }

    console.line(&format!("Configured chains in {environment}:"))?;
    console.blank()?;
    for (name, config) in &chains {
        let mode = config.mode().map(|m| format!(" [{m}]")).unwrap_or_default();
        let token = if config.token_address().is_some() { " ✓ token" } else { "" };
        let key = if config.private_key().is_some() { " ✓ key" } else { "" };
        console.line(&format!("  • {name}{mode}{token}{key}"))?;
    }
    Ok(Status::Success)
}
