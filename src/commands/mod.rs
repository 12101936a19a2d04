mod chain;
mod convert;
mod show;
mod validate;
mod wizard;

use crate::address::AddressConverter;
use crate::cli::{Commands, ConfigCommands};
use crate::console::Console;
use crate::constants::Environment;
use crate::display::format_private_key;
use crate::model::ChainConfig;
use crate::store::ConfigStore;
use crate::wizard::{PromptResult, Prompter};
use anyhow::Result;
use std::io::Write;
use std::process::ExitCode;

pub use chain::*;
pub use convert::*;
pub use show::*;
pub use validate::*;
pub use wizard::*;

/// How a command finished. `Failure` means the command already told the
/// user what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// What every command needs besides its arguments and the console.
pub struct Context<'a> {
    pub store: ConfigStore,
    pub converter: &'a dyn AddressConverter,
    pub default_environment: Environment,
}

impl<'a> Context<'a> {
    pub fn new(store: ConfigStore, converter: &'a dyn AddressConverter, default_environment: Environment) -> Self {
        Self {
            store,
            converter,
            default_environment,
        }
    }

    pub fn environment(&self, requested: Option<Environment>) -> Environment {
        requested.unwrap_or(self.default_environment)
    }
}

/// Runs one parsed command. `prompter` is only called by the wizard, so
/// the other commands work without a terminal.
pub fn execute_command<W, E, P, F>(
    command: Commands,
    ctx: &Context,
    console: &mut Console<W, E>,
    prompter: F,
) -> Result<Status>
where
    W: Write,
    E: Write,
    P: Prompter,
    F: FnOnce() -> PromptResult<P>,
{
    match command {
        Commands::Config(ConfigCommands::Set(args)) => set_chain(ctx, &args, console),
        Commands::Config(ConfigCommands::Show { chain, env }) => show_chain(ctx, chain, env, console),
        Commands::Config(ConfigCommands::List { env }) => list_chains(ctx, env, console),
        Commands::Wizard { env } => run_wizard(ctx, env, console, prompter),
        Commands::Validate { env } => validate(ctx, env, console),
        Commands::Convert { address, chain } => convert(ctx, &address, chain, console),
        Commands::Show => show_file(ctx, console),
    }
}

// Shared by `config set` and `config show`.
fn write_chain_details<W: Write, E: Write>(console: &mut Console<W, E>, config: &ChainConfig) -> Result<()> {
    if let Some(rpc) = config.rpc() {
        console.line(&format!("  RPC:          {rpc}"))?;
    }
    if let Some(key) = config.private_key() {
        console.line(&format!("  Private Key:  {}", format_private_key(key)))?;
    }
    if let Some(token) = config.token_address() {
        console.line(&format!("  Token:        {token}"))?;
    }
    if let Some(mode) = config.mode() {
        console.line(&format!("  Mode:         {mode}"))?;
    }
    Ok(())
}
