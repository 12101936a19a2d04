use wormhole_config::{cli, commands, console, settings, terminal, text, wizard};

use anyhow::{Context as _, Result};
use clap::Parser;
use cli::Cli;
use commands::{execute_command, Context, Status};
use console::Console;
use settings::load_settings;
use std::process::ExitCode;
use tracing::Level;
use wizard::TerminalPrompter;
use wormhole_config::{ConfigStore, UniversalAddressConverter};

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Logs go to stderr so command output stays clean
    let log_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(status) => status.into(),
        Err(e) => {
            let width = terminal::terminal_width() as isize;
            eprintln!("{}", text::TextWrapper::wrap(&format!("Error: {e:#}"), width));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Status> {
    let settings = load_settings(cli.settings_overrides()).context("Failed to load settings")?;
    tracing::debug!(?settings, "settings loaded");

    let converter = UniversalAddressConverter;
    let ctx = Context::new(
        ConfigStore::new(&settings.config_file),
        &converter,
        settings.default_environment,
    );
    let mut console = Console::stdio(settings.wrap_width());

    execute_command(cli.command, &ctx, &mut console, TerminalPrompter::new)
}
