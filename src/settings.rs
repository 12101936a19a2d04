use crate::constants::{Environment, DEFAULT_CONFIG_FILE};
use crate::terminal::terminal_width;
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment as EnvSource,
    File,
    Map,
    Source,
    Value,
};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

const ENV_PREFIX: &str = "WORMHOLE";
const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error(transparent)]
    Source(#[from] ConfigCrateError),
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

// Every field optional so each layer only overrides what it sets.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileSettings {
    config_file: Option<PathBuf>,
    width: Option<isize>,
    default_environment: Option<Environment>,
}

/// Settings of the tool itself, not of the deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Deployment document to read and write.
    pub config_file: PathBuf,
    /// Fixed wrap width; `None` follows the terminal, `0` disables wrapping.
    pub width: Option<isize>,
    /// Environment used when a command gets no `--env`.
    pub default_environment: Environment,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            width: None,
            default_environment: Environment::default(),
        }
    }
}

impl Settings {
    pub fn wrap_width(&self) -> isize {
        self.width.unwrap_or_else(|| terminal_width() as isize)
    }
}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub settings_file: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub width: Option<isize>,
}

/// Loads settings: defaults, then the settings file, then `WORMHOLE_*`
/// environment variables, then command-line values.
pub fn load_settings(overrides: SettingsOverrides) -> Result<Settings, SettingsError> {
    let env_source = EnvSource::with_prefix(ENV_PREFIX);
    // Missing variables are fine; a failed scan just means no overrides.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_settings(overrides, Some(env_map))
}

fn default_settings_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "wormhole", "wormhole")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
}

fn build_settings(
    overrides: SettingsOverrides,
    override_source: Option<Map<String, Value>>,
) -> Result<Settings, SettingsError> {
    let settings_path = overrides.settings_file.clone().or_else(default_settings_path);

    let mut builder = ConfigCrate::builder();

    if let Some(ref path) = settings_path {
        debug!(path = %path.display(), "settings file");
        // An explicitly named file must exist.
        let required = overrides.settings_file.is_some();
        builder = builder.add_source(File::from(path.clone()).required(required));
    }

    if let Some(values) = override_source {
        for (key, value) in values {
            builder = builder.set_override(&key, value)?;
        }
    }

    let loaded: FileSettings = builder.build()?.try_deserialize()?;

    let settings = Settings {
        config_file: overrides
            .config_file
            .or(loaded.config_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
        width: overrides.width.or(loaded.width),
        default_environment: loaded.default_environment.unwrap_or_default(),
    };

    validate_settings(&settings)?;
    Ok(settings)
}

fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings.config_file.as_os_str().is_empty() {
        return Err(SettingsError::Invalid("config_file must not be empty".to_string()));
    }
    if let Some(width) = settings.width {
        if width < 0 {
            return Err(SettingsError::Invalid(format!(
                "width must be 0 (no wrapping) or a positive column count, got {width}"
            )));
        }
    }
    Ok(())
}
