use super::{Context, Status};
use crate::console::Console;
use crate::constants::Environment;
use crate::errors::AppError;
use crate::wizard::{PromptError, PromptResult, Prompter, Wizard};
use anyhow::Result;
use std::io::Write;

pub fn run_wizard<W, E, P, F>(
    ctx: &Context,
    env: Option<Environment>,
    console: &mut Console<W, E>,
    prompter: F,
) -> Result<Status>
where
    W: Write,
    E: Write,
    P: Prompter,
    F: FnOnce() -> PromptResult<P>,
{
    let outcome = prompter().map_err(AppError::from).and_then(|mut prompter| {
        Wizard::new(&mut prompter, console, &ctx.store, ctx.converter).run(env)
    });

    match outcome {
        // Declining at the summary is a normal exit.
        Ok(_) => Ok(Status::Success),
        Err(AppError::Prompt(PromptError::Cancelled)) => {
            console.blank()?;
            console.line("❌ Configuration cancelled.")?;
            console.blank()?;
            Ok(Status::Failure)
        }
        Err(AppError::Prompt(PromptError::NotATerminal)) => {
            console.error_line("")?;
            console.error_line("❌ Error: Your terminal does not support interactive prompts.")?;
            console.error_line("Please use the direct configuration commands instead: wormhole config set --help")?;
            console.error_line("")?;
            Ok(Status::Failure)
        }
        Err(e) => {
            console.error_line("")?;
            console.error_line(&format!("❌ Error: {e}"))?;
            console.error_line("")?;
            Ok(Status::Failure)
        }
    }
}
