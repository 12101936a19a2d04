use super::{Context, Status};
use crate::console::Console;
use crate::constants::Chain;
use anyhow::Result;
use std::io::Write;
use tracing::warn;

pub fn convert<W: Write, E: Write>(
    ctx: &Context,
    address: &str,
    chain: Chain,
    console: &mut Console<W, E>,
) -> Result<Status> {
    if !ctx.converter.is_valid_format(address, chain) {
        console.error_line("")?;
        console.error_line(&format!(
            "Error: The address provided is not a valid {chain} address."
        ))?;
        console.error_line("")?;
        for hint in chain.family().format_hint() {
            console.error_line(hint)?;
        }
        console.error_line("")?;
        console.error_line("Tip: Use \"wormhole convert --help\" for more information.")?;
        return Ok(Status::Failure);
    }

    console.blank()?;
    console.line(&format!("Converting {chain} address to Wormhole format..."))?;
    console.blank()?;

    let universal = match ctx.converter.to_canonical(address, chain) {
        Ok(universal) => universal,
        Err(e) => {
            warn!(%chain, error = %e, "conversion failed after format check");
            console.error_line("")?;
            console.error_line(&format!("Error: {e}"))?;
            console.error_line("")?;
            console.error_line(
                "If this error persists, please verify that the address is correct for the specified chain.",
            )?;
            return Ok(Status::Failure);
        }
    };

    console.line(&format!("Original address: {address}"))?;
    console.line(&format!("Wormhole format:  {universal}"))?;
    console.blank()?;
    console.line(&format!(
        "This is the format that will be stored in your {} file.",
        ctx.store.path().display()
    ))?;
    Ok(Status::Success)
}
