//! Interactive configuration wizard.
//!
//! The flow is linear: environment, deployment strategy, chain selection,
//! LOCKING chain, per-chain settings, summary, save. Prompts go through the
//! [`Prompter`] trait so the flow can run against a real terminal
//! ([`TerminalPrompter`]) or a scripted answer list in tests.

use crate::address::AddressConverter;
use crate::console::Console;
use crate::constants::{default_rpc, Chain, Environment, Mode};
use crate::display::{format_address_default, format_private_key};
use crate::errors::{AppError, AppResult};
use crate::model::{ChainConfig, EnvironmentConfig};
use crate::store::ConfigStore;
use crate::terminal::terminal_width;
use crate::text::TextWrapper;
use crate::validator::{is_env_reference, validate_environment};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};
use std::io::{self, IsTerminal, Write};
use thiserror::Error;
use tracing::debug;

const MAX_CHAINS: usize = 5;
const RULE_WIDTH: usize = 50;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Configuration cancelled.")]
    Cancelled,
    #[error("Your terminal does not support interactive prompts.")]
    NotATerminal,
    #[error("Input error: {0}")]
    Io(#[from] io::Error),
}

impl From<dialoguer::Error> for PromptError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => PromptError::Cancelled,
            dialoguer::Error::IO(e) => PromptError::Io(e),
        }
    }
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Answers validation: `Err` carries the message shown before asking again.
pub type Validator<'v, T> = &'v dyn Fn(&T) -> Result<(), String>;

pub trait Prompter {
    /// Picks one item, returning its index.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> PromptResult<usize>;

    /// Picks any number of items, returning their indices.
    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        validate: Validator<'_, [usize]>,
    ) -> PromptResult<Vec<usize>>;

    /// Reads a line of text, asking again until `validate` accepts it.
    fn input(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        validate: Validator<'_, str>,
    ) -> PromptResult<String>;
}

/// [`Prompter`] backed by `dialoguer` on the controlling terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> PromptResult<Self> {
        if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
            return Err(PromptError::NotATerminal);
        }
        Ok(Self {
            theme: ColorfulTheme::default(),
        })
    }
}

/// Indents a rejected answer's message and wraps it to `width`.
fn rejection_text(message: &str, width: isize) -> String {
    TextWrapper::wrap(&format!("  {message}"), width)
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> PromptResult<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()?
            .ok_or(PromptError::Cancelled)
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        validate: Validator<'_, [usize]>,
    ) -> PromptResult<Vec<usize>> {
        // MultiSelect has no validation hook, so re-ask by hand.
        loop {
            let picked = MultiSelect::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(items)
                .interact_opt()?
                .ok_or(PromptError::Cancelled)?;
            match validate(picked.as_slice()) {
                Ok(()) => return Ok(picked),
                Err(message) => eprintln!("{}", rejection_text(&message, terminal_width() as isize)),
            }
        }
    }

    fn input(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        validate: Validator<'_, str>,
    ) -> PromptResult<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|value: &String| validate(value.as_str()));
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One LOCKING chain holds the original tokens, the rest are BURNING.
    Multichain,
    /// Every chain is BURNING.
    Single,
}

pub fn validate_chain_count(strategy: Strategy, input: &str) -> Result<usize, String> {
    let count = match input.trim().parse::<usize>() {
        Ok(count) if (1..=MAX_CHAINS).contains(&count) => count,
        _ => return Err(format!("Please enter a number between 1 and {MAX_CHAINS}")),
    };
    if strategy == Strategy::Multichain && count == 1 {
        return Err("A multichain deployment requires at least 2 chains. Please enter 2 or more, or choose single mode deployment.".to_string());
    }
    Ok(count)
}

pub fn validate_rpc(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("RPC endpoint is required".to_string());
    }
    if !input.starts_with("http://") && !input.starts_with("https://") {
        return Err("RPC endpoint must start with http:// or https://".to_string());
    }
    Ok(())
}

pub fn validate_private_key(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("Private key is required".to_string());
    }
    Ok(())
}

/// Walks the user through one environment and saves it.
pub struct Wizard<'a, P: Prompter, W: Write, E: Write> {
    prompter: &'a mut P,
    console: &'a mut Console<W, E>,
    store: &'a ConfigStore,
    converter: &'a dyn AddressConverter,
}

impl<'a, P: Prompter, W: Write, E: Write> Wizard<'a, P, W, E> {
    pub fn new(
        prompter: &'a mut P,
        console: &'a mut Console<W, E>,
        store: &'a ConfigStore,
        converter: &'a dyn AddressConverter,
    ) -> Self {
        Self {
            prompter,
            console,
            store,
            converter,
        }
    }

    /// Returns `true` when a configuration was saved, `false` when the user
    /// declined or the entered configuration did not validate.
    pub fn run(&mut self, preselected: Option<Environment>) -> AppResult<bool> {
        self.console.blank()?;
        self.console
            .line("🧙 Welcome to the Wormhole Multichain Configuration Wizard!")?;
        self.console.blank()?;

        let environment = self.select_environment(preselected)?;
        let (strategy, count) = self.select_strategy()?;
        let chains = self.select_chains(count)?;
        let locking = match strategy {
            Strategy::Multichain => Some(self.select_locking_chain(&chains)?),
            Strategy::Single => None,
        };
        let configs = self.configure_chains(&chains, locking, environment)?;

        if !self.show_summary_and_confirm(environment, &configs)? {
            self.console.blank()?;
            self.console.line("❌ Configuration cancelled.")?;
            self.console.blank()?;
            return Ok(false);
        }

        let section: EnvironmentConfig = configs
            .iter()
            .map(|(chain, config)| (chain.as_str().to_string(), config.clone()))
            .collect();
        self.store.set_environment(environment, section)?;
        debug!(%environment, chains = configs.len(), "wizard saved environment");

        self.console.blank()?;
        self.console.line(&format!(
            "✓ Configuration saved to {}",
            self.store.path().display()
        ))?;
        self.console.blank()?;

        self.show_next_steps(environment, &configs)?;
        Ok(true)
    }

    fn select_environment(&mut self, preselected: Option<Environment>) -> AppResult<Environment> {
        if let Some(environment) = preselected {
            self.console.line(&format!("Environment: {environment}"))?;
            self.console.blank()?;
            return Ok(environment);
        }

        let choices = [
            (Environment::Testnet, "Testnet (recommended for development)"),
            (Environment::Mainnet, "Mainnet (production deployments)"),
            (Environment::Devnet, "Devnet (local development)"),
        ];
        let items: Vec<String> = choices.iter().map(|(_, label)| label.to_string()).collect();
        let picked = self
            .prompter
            .select("Which environment are you configuring?", &items, 0)?;
        self.console.blank()?;
        Ok(choices[picked].0)
    }

    fn select_strategy(&mut self) -> AppResult<(Strategy, usize)> {
        let items = vec![
            "Multi-chain bridge (1 LOCKING chain, others BURNING)".to_string(),
            "Single mode deployment (all chains BURNING)".to_string(),
        ];
        let strategy = match self
            .prompter
            .select("What type of deployment are you setting up?", &items, 0)?
        {
            0 => Strategy::Multichain,
            _ => Strategy::Single,
        };

        let validate = |value: &str| validate_chain_count(strategy, value).map(|_| ());
        let answer = self.prompter.input(
            "How many chains do you want to configure?",
            Some("2"),
            &validate,
        )?;
        let count = validate_chain_count(strategy, &answer).map_err(AppError::Usage)?;
        self.console.blank()?;
        Ok((strategy, count))
    }

    fn select_chains(&mut self, count: usize) -> AppResult<Vec<Chain>> {
        let items: Vec<String> = Chain::ALL.iter().map(|c| c.display_name().to_string()).collect();
        let validate = |picked: &[usize]| {
            if picked.len() == count {
                Ok(())
            } else {
                Err(format!("Please select exactly {count} chain(s)"))
            }
        };
        let picked = self.prompter.multi_select(
            &format!("Select {count} chain(s) to configure:"),
            &items,
            &validate,
        )?;
        self.console.blank()?;
        Ok(picked.into_iter().map(|i| Chain::ALL[i]).collect())
    }

    fn select_locking_chain(&mut self, chains: &[Chain]) -> AppResult<Chain> {
        if let [only] = chains {
            return Ok(*only);
        }
        let items: Vec<String> = chains.iter().map(|c| c.display_name().to_string()).collect();
        let picked = self.prompter.select(
            "Which chain will hold the original tokens (LOCKING mode)? The other chain(s) will use BURNING mode for wrapped tokens.",
            &items,
            0,
        )?;
        self.console.blank()?;
        Ok(chains[picked])
    }

    fn configure_chains(
        &mut self,
        chains: &[Chain],
        locking: Option<Chain>,
        environment: Environment,
    ) -> AppResult<Vec<(Chain, ChainConfig)>> {
        let mut configs = Vec::with_capacity(chains.len());
        for (i, &chain) in chains.iter().enumerate() {
            let mode = if locking == Some(chain) {
                Mode::Locking
            } else {
                Mode::Burning
            };
            self.console.blank()?;
            self.console.line(&format!(
                "Configuring: {} ({mode}) [{}/{}]",
                chain.display_name(),
                i + 1,
                chains.len()
            ))?;
            self.console.line(&"━".repeat(RULE_WIDTH))?;

            let config = self.configure_chain(chain, mode, environment)?;
            configs.push((chain, config));
        }
        self.console.blank()?;
        Ok(configs)
    }

    fn configure_chain(&mut self, chain: Chain, mode: Mode, environment: Environment) -> AppResult<ChainConfig> {
        let default = default_rpc(chain, environment);
        let items = vec!["Use default".to_string(), "Custom RPC endpoint".to_string()];
        let rpc = match self
            .prompter
            .select(&format!("RPC Endpoint (default: {default})"), &items, 0)?
        {
            0 => default.to_string(),
            _ => self
                .prompter
                .input("Enter custom RPC endpoint:", None, &validate_rpc)?,
        };

        self.console.blank()?;
        self.console
            .line("  ⚠ Security tip: Use environment variable syntax for production")?;
        self.console.line(&format!(
            "  Example: ${{{}_PRIVATE_KEY}}",
            chain.as_str().to_uppercase()
        ))?;
        self.console.blank()?;

        let private_key = self.prompter.input(
            "Private Key (required for transactions):",
            None,
            &validate_private_key,
        )?;

        let converter = self.converter;
        let validate_token = |value: &str| {
            if value.trim().is_empty() {
                Err("Token address is required".to_string())
            } else if !converter.is_valid_format(value, chain) {
                Err(chain.family().invalid_message().to_string())
            } else {
                Ok(())
            }
        };
        let token = self
            .prompter
            .input("Token contract address:", None, &validate_token)?;

        self.console.line("  ⟳ Converting to Wormhole format...")?;
        let token_address = self.converter.to_canonical(&token, chain)?;
        self.console.line(&format!(
            "  ✓ Converted: {}",
            format_address_default(&token_address)
        ))?;

        Ok(ChainConfig::new(mode, rpc, private_key, token_address))
    }

    fn show_summary_and_confirm(
        &mut self,
        environment: Environment,
        configs: &[(Chain, ChainConfig)],
    ) -> AppResult<bool> {
        self.console.blank()?;
        self.console.line("Configuration Summary")?;
        self.console.line(&"━".repeat(RULE_WIDTH))?;
        self.console.blank()?;
        self.console.line(&format!("Environment: {environment}"))?;
        self.console.blank()?;
        self.console.line("Chains:")?;

        for (chain, config) in configs {
            self.console.line(&format!(
                "  • {} [{}]",
                chain.display_name(),
                config.mode().unwrap_or_default()
            ))?;
            self.console
                .line(&format!("    RPC:   {}", config.rpc().unwrap_or_default()))?;
            self.console.line(&format!(
                "    Key:   {}",
                format_private_key(config.private_key().unwrap_or_default())
            ))?;
            self.console.line(&format!(
                "    Token: {}",
                format_address_default(config.token_address().unwrap_or_default())
            ))?;
            self.console.blank()?;
        }

        let section: EnvironmentConfig = configs
            .iter()
            .map(|(chain, config)| (chain.as_str().to_string(), config.clone()))
            .collect();
        let report = validate_environment(&section, environment);

        if !report.errors.is_empty() {
            self.console.line("❌ Configuration has errors:")?;
            self.console.blank()?;
            for error in &report.errors {
                self.console.line(&format!("   ✗ {error}"))?;
            }
            self.console.blank()?;
            self.console
                .line("Please run the wizard again to fix these issues.")?;
            return Ok(false);
        }

        if report.warnings.is_empty() {
            self.console.line("✓ Configuration is valid")?;
            self.console.blank()?;
        } else {
            self.console.line("⚠ Warnings:")?;
            self.console.blank()?;
            for warning in &report.warnings {
                self.console.line(&format!("   ⚠ {warning}"))?;
            }
            self.console.blank()?;
        }

        let items = vec!["Yes, save and exit".to_string(), "Cancel".to_string()];
        Ok(self.prompter.select("Save this configuration?", &items, 0)? == 0)
    }

    fn show_next_steps(&mut self, environment: Environment, configs: &[(Chain, ChainConfig)]) -> AppResult<()> {
        self.console.line("Next steps:")?;
        self.console.blank()?;

        let env_vars: Vec<&str> = configs
            .iter()
            .filter_map(|(_, config)| config.private_key())
            .filter(|key| is_env_reference(key))
            .map(|key| &key[2..key.len() - 1])
            .collect();

        if !env_vars.is_empty() {
            self.console.line("  1. Set your environment variables:")?;
            for name in &env_vars {
                self.console
                    .line(&format!("     export {name}=\"your-private-key\""))?;
            }
            self.console.blank()?;
        }

        let step = if env_vars.is_empty() { 1 } else { 2 };
        self.console
            .line(&format!("  {step}. Verify your configuration:"))?;
        self.console
            .line(&format!("     wormhole validate --env {environment}"))?;
        self.console.blank()?;
        self.console
            .line(&format!("  {}. View your configuration anytime:", step + 1))?;
        self.console.line("     wormhole config show")?;
        self.console.blank()?;
        Ok(())
    }
}
