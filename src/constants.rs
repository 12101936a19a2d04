use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CONFIG_FILE: &str = "wormhole.config.json";

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Mainnet,
    #[default]
    Testnet,
    Devnet,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Environment::Mainnet, Environment::Testnet, Environment::Devnet];

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Mainnet => "mainnet",
            Environment::Testnet => "testnet",
            Environment::Devnet => "devnet",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address encoding family of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainFamily {
    Evm,
    Solana,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Arbitrum,
    Optimism,
    Base,
    Solana,
}

impl Chain {
    pub const ALL: [Chain; 5] = [
        Chain::Ethereum,
        Chain::Arbitrum,
        Chain::Optimism,
        Chain::Base,
        Chain::Solana,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Arbitrum => "arbitrum",
            Chain::Optimism => "optimism",
            Chain::Base => "base",
            Chain::Solana => "solana",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Arbitrum => "Arbitrum",
            Chain::Optimism => "Optimism",
            Chain::Base => "Base",
            Chain::Solana => "Solana",
        }
    }

    pub fn family(self) -> ChainFamily {
        match self {
            Chain::Solana => ChainFamily::Solana,
            _ => ChainFamily::Evm,
        }
    }

    pub fn from_name(name: &str) -> Option<Chain> {
        Chain::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Locking,
    Burning,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Locking => "LOCKING",
            Mode::Burning => "BURNING",
        }
    }

    pub fn parse(value: &str) -> Option<Mode> {
        match value {
            "LOCKING" => Some(Mode::Locking),
            "BURNING" => Some(Mode::Burning),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public RPC endpoint used when a chain has none configured.
pub fn default_rpc(chain: Chain, environment: Environment) -> &'static str {
    match (environment, chain) {
        (Environment::Mainnet, Chain::Ethereum) => "https://eth.llamarpc.com",
        (Environment::Mainnet, Chain::Arbitrum) => "https://arbitrum-one-rpc.publicnode.com",
        (Environment::Mainnet, Chain::Optimism) => "https://mainnet.optimism.io",
        (Environment::Mainnet, Chain::Base) => "https://mainnet.base.org",
        (Environment::Mainnet, Chain::Solana) => "https://api.mainnet-beta.solana.com",
        (Environment::Testnet, Chain::Ethereum) => "https://ethereum-sepolia-rpc.publicnode.com",
        (Environment::Testnet, Chain::Arbitrum) => "https://arbitrum-sepolia-rpc.publicnode.com",
        (Environment::Testnet, Chain::Optimism) => "https://sepolia.optimism.io",
        (Environment::Testnet, Chain::Base) => "https://sepolia.base.org",
        (Environment::Testnet, Chain::Solana) => "https://api.testnet.solana.com",
        (Environment::Devnet, Chain::Ethereum) => "http://localhost:8545",
        (Environment::Devnet, Chain::Arbitrum) => "http://localhost:8546",
        (Environment::Devnet, Chain::Optimism) => "http://localhost:8547",
        (Environment::Devnet, Chain::Base) => "http://localhost:8548",
        (Environment::Devnet, Chain::Solana) => "http://localhost:8899",
    }
}
