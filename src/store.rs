use crate::constants::{Chain, Environment};
use crate::model::{ChainConfig, DeploymentConfig, EnvironmentConfig};
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read config file: {0}")]
    Read(String),
    #[error("Failed to write config file: {0}")]
    Write(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Reads and writes the deployment document at one fixed location.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: resolve_path(path.as_ref()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the document. A missing file reads as an empty document.
    pub fn read(&self) -> StoreResult<DeploymentConfig> {
        if !self.exists() {
            debug!(path = %self.path.display(), "config file not found, using empty config");
            return Ok(DeploymentConfig::default());
        }

        let data = fs::read_to_string(&self.path).map_err(|e| StoreError::Read(e.to_string()))?;
        let config = serde_json::from_str(&data).map_err(|e| StoreError::Read(e.to_string()))?;
        debug!(path = %self.path.display(), "loaded config file");
        Ok(config)
    }

    pub fn write(&self, config: &DeploymentConfig) -> StoreResult<()> {
        self.write_json(config).map_err(|e| StoreError::Write(e.to_string()))?;
        debug!(path = %self.path.display(), "wrote config file");
        Ok(())
    }

    fn write_json(&self, config: &DeploymentConfig) -> io::Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, config)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }

    pub fn environment(&self, environment: Environment) -> StoreResult<EnvironmentConfig> {
        let mut config = self.read()?;
        Ok(std::mem::take(config.environment_mut(environment)))
    }

    pub fn chain(&self, chain: Chain, environment: Environment) -> StoreResult<Option<ChainConfig>> {
        Ok(self.environment(environment)?.remove(chain.as_str()))
    }

    /// Replaces the whole entry of `chain`.
    pub fn set_chain(&self, chain: Chain, environment: Environment, chain_config: ChainConfig) -> StoreResult<()> {
        let mut config = self.read()?;
        config
            .environment_mut(environment)
            .insert(chain.as_str().to_string(), chain_config);
        self.write(&config)
    }

    /// Merges `updates` into the entry of `chain`, creating it if needed.
    pub fn update_chain(&self, chain: Chain, environment: Environment, updates: ChainConfig) -> StoreResult<ChainConfig> {
        let mut config = self.read()?;
        let entry = config
            .environment_mut(environment)
            .entry(chain.as_str().to_string())
            .or_default();
        entry.merge(updates);
        let updated = entry.clone();
        self.write(&config)?;
        Ok(updated)
    }

    /// Replaces one environment section and keeps the others.
    pub fn set_environment(&self, environment: Environment, chains: EnvironmentConfig) -> StoreResult<()> {
        let mut config = self.read()?;
        *config.environment_mut(environment) = chains;
        self.write(&config)
    }
}

/// Relative paths are taken from the current directory.
pub fn resolve_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::Mode;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::new(dir.path().join("wormhole.config.json"))
    }

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_path(Path::new("custom-config.json"));
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("custom-config.json"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("abs.json");
        assert_eq!(resolve_path(&path), path);
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(!store.exists());
        assert_eq!(store.read().unwrap(), DeploymentConfig::default());
    }

    #[test]
    fn test_read_invalid_json_fails() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();

        let err = store.read().unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config file:"));
    }

    #[test]
    fn test_write_includes_all_environments() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.write(&DeploymentConfig::default()).unwrap();

        let written = fs::read_to_string(store.path()).unwrap();
        assert_eq!(written, "{\n  \"mainnet\": {},\n  \"testnet\": {},\n  \"devnet\": {}\n}\n");
    }

    #[test]
    fn test_set_chain_overwrites_entry() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let first = ChainConfig::new(Mode::Locking, "https://a.rpc", "${A}", "0x01");
        let second = ChainConfig {
            rpc: Some("https://b.rpc".to_string()),
            ..Default::default()
        };

        store.set_chain(Chain::Ethereum, Environment::Testnet, first).unwrap();
        store.set_chain(Chain::Ethereum, Environment::Testnet, second.clone()).unwrap();

        assert_eq!(store.chain(Chain::Ethereum, Environment::Testnet).unwrap(), Some(second));
    }

    #[test]
    fn test_update_chain_merges_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .set_chain(
                Chain::Base,
                Environment::Mainnet,
                ChainConfig::new(Mode::Burning, "https://a.rpc", "${A}", "0x01"),
            )
            .unwrap();

        let updated = store
            .update_chain(
                Chain::Base,
                Environment::Mainnet,
                ChainConfig {
                    mode: Some("LOCKING".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.mode(), Some("LOCKING"));
        assert_eq!(updated.rpc(), Some("https://a.rpc"));
        assert_eq!(store.chain(Chain::Base, Environment::Mainnet).unwrap(), Some(updated));
    }

    #[test]
    fn test_update_creates_missing_chain() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .update_chain(
                Chain::Solana,
                Environment::Devnet,
                ChainConfig {
                    private_key: Some("${SOL_KEY}".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let chain = store.chain(Chain::Solana, Environment::Devnet).unwrap().unwrap();
        assert_eq!(chain.private_key(), Some("${SOL_KEY}"));
        assert!(store.chain(Chain::Solana, Environment::Testnet).unwrap().is_none());
    }

    #[test]
    fn test_set_environment_keeps_other_sections() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .set_chain(Chain::Ethereum, Environment::Mainnet, ChainConfig::default())
            .unwrap();

        let mut chains = EnvironmentConfig::new();
        chains.insert("base".to_string(), ChainConfig::default());
        store.set_environment(Environment::Testnet, chains).unwrap();

        let config = store.read().unwrap();
        assert!(config.mainnet.contains_key("ethereum"));
        assert!(config.testnet.contains_key("base"));
    }
}
