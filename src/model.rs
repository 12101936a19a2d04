use crate::constants::{Environment, Mode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Chains of one environment, keyed by chain name.
pub type EnvironmentConfig = BTreeMap<String, ChainConfig>;

/// Settings of one chain. Every field is optional on disk so that
/// incomplete entries can still be loaded and reported by the validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_address: Option<String>,
    // Kept as text: unknown modes must survive a load to be reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChainConfig {
    pub fn new(mode: Mode, rpc: impl Into<String>, private_key: impl Into<String>, token_address: impl Into<String>) -> Self {
        Self {
            rpc: Some(rpc.into()),
            private_key: Some(private_key.into()),
            token_address: Some(token_address.into()),
            mode: Some(mode.as_str().to_string()),
            extra: Map::new(),
        }
    }

    pub fn rpc(&self) -> Option<&str> {
        non_empty(&self.rpc)
    }

    pub fn private_key(&self) -> Option<&str> {
        non_empty(&self.private_key)
    }

    pub fn token_address(&self) -> Option<&str> {
        non_empty(&self.token_address)
    }

    pub fn mode(&self) -> Option<&str> {
        non_empty(&self.mode)
    }

    /// Overwrites the fields that `updates` sets, leaving the rest alone.
    pub fn merge(&mut self, updates: ChainConfig) {
        if updates.rpc.is_some() {
            self.rpc = updates.rpc;
        }
        if updates.private_key.is_some() {
            self.private_key = updates.private_key;
        }
        if updates.token_address.is_some() {
            self.token_address = updates.token_address;
        }
        if updates.mode.is_some() {
            self.mode = updates.mode;
        }
        self.extra.extend(updates.extra);
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// The whole deployment document, one section per environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    #[serde(default)]
    pub mainnet: EnvironmentConfig,
    #[serde(default)]
    pub testnet: EnvironmentConfig,
    #[serde(default)]
    pub devnet: EnvironmentConfig,
}

impl DeploymentConfig {
    pub fn environment(&self, environment: Environment) -> &EnvironmentConfig {
        match environment {
            Environment::Mainnet => &self.mainnet,
            Environment::Testnet => &self.testnet,
            Environment::Devnet => &self.devnet,
        }
    }

    pub fn environment_mut(&mut self, environment: Environment) -> &mut EnvironmentConfig {
        match environment {
            Environment::Mainnet => &mut self.mainnet,
            Environment::Testnet => &mut self.testnet,
            Environment::Devnet => &mut self.devnet,
        }
    }
}
