use crate::constants::{Chain, Environment, Mode};
use crate::settings::SettingsOverrides;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const AFTER_HELP: &str = "This tool generates a wormhole.config.json file for multichain deployments. It does not interact with blockchains or perform any on-chain transactions.

Important: Keep your private keys secure. Consider using environment variable syntax (${VAR_NAME}) instead of hardcoding keys in the configuration file.";

#[derive(Parser, Debug)]
#[command(name = "wormhole", author, version, about = "Wormhole multichain deployment configuration", long_about = None)]
#[command(propagate_version = true, after_help = AFTER_HELP)]
pub struct Cli {
    /// Path to the configuration file to use instead of wormhole.config.json
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to a settings file for this tool
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Wrap output at this many columns (0 disables wrapping)
    #[arg(short, long, global = true, value_name = "COLUMNS")]
    pub width: Option<u16>,

    /// Log more details to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn settings_overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            settings_file: self.settings.clone(),
            config_file: self.config.clone(),
            width: self.width.map(|cols| cols as isize),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage your multichain deployment configuration: RPC endpoints,
    /// private keys, token addresses and deployment modes (BURNING or LOCKING)
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Launch an interactive wizard that builds a complete multichain
    /// configuration, recommended for first-time users
    Wizard {
        /// Pre-select the environment to configure (skips environment selection step)
        #[arg(short, long, value_enum)]
        env: Option<Environment>,
    },

    /// Check that modes are consistent (all BURNING, or exactly one LOCKING
    /// with the rest BURNING) and that all required fields are present
    Validate {
        /// The environment to validate. If not specified, validates all environments.
        #[arg(short, long, value_enum)]
        env: Option<Environment>,
    },

    /// Convert a native blockchain address to the universal 32-byte address format
    #[command(after_help = "Examples:\n  wormhole convert 0x1234567890123456789012345678901234567890 ethereum\n  wormhole convert So11111111111111111111111111111111111111112 solana")]
    Convert {
        /// The native address to convert (EVM addresses start with 0x, Solana addresses are base58 encoded)
        address: String,

        /// The blockchain this address belongs to
        #[arg(value_enum)]
        chain: Chain,
    },

    /// Display the entire configuration file. Private keys are truncated for security.
    Show,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set or update configuration for a specific chain. At least one option must be specified.
    Set(SetArgs),

    /// Display the current configuration for one or all chains in an environment
    Show {
        /// The specific chain to show. If not specified, shows all configured chains.
        #[arg(value_enum)]
        chain: Option<Chain>,

        /// The environment to display configuration for
        #[arg(short, long, value_enum)]
        env: Option<Environment>,
    },

    /// List configured chains with their mode and whether a token and key are set
    List {
        /// The environment to list configured chains for
        #[arg(short, long, value_enum)]
        env: Option<Environment>,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(after_help = "Examples:\n  wormhole config set ethereum --rpc https://eth.example.com --mode locking\n  wormhole config set solana --env mainnet --private-key '${SOL_KEY}'\n  wormhole config set arbitrum --token 0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9 --mode burning")]
pub struct SetArgs {
    /// The blockchain to configure
    #[arg(value_enum)]
    pub chain: Chain,

    /// The deployment environment (mainnet, testnet or devnet)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// The RPC endpoint URL. A default public endpoint is used when the chain has none.
    #[arg(long)]
    pub rpc: Option<String>,

    /// The private key for signing transactions. Use ${ENV_VAR_NAME} to reference an environment variable.
    #[arg(long)]
    pub private_key: Option<String>,

    /// The token contract address, stored in universal 32-byte format
    #[arg(long)]
    pub token: Option<String>,

    /// LOCKING for the chain holding the original tokens (only one), BURNING for all others
    #[arg(long, value_enum, ignore_case = true)]
    pub mode: Option<Mode>,
}

impl SetArgs {
    pub fn has_updates(&self) -> bool {
        self.rpc.is_some() || self.private_key.is_some() || self.token.is_some() || self.mode.is_some()
    }
}
