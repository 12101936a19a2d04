use crate::constants::{Environment, Mode};
use crate::model::{DeploymentConfig, EnvironmentConfig};

// Keys shorter than this that are not `${VAR}` references get a warning.
const MIN_PRIVATE_KEY_LENGTH: usize = 32;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidation {
    pub results: Vec<(Environment, ValidationReport)>,
}

impl ConfigValidation {
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, report)| report.is_valid())
    }

    pub fn report(&self, environment: Environment) -> Option<&ValidationReport> {
        self.results
            .iter()
            .find(|(env, _)| *env == environment)
            .map(|(_, report)| report)
    }
}

/// `${NAME}` references are resolved by the deployment tooling, not stored.
pub fn is_env_reference(value: &str) -> bool {
    value.starts_with("${") && value.ends_with('}')
}

/// Checks one environment: required fields, known modes, and at most one
/// LOCKING chain with every other chain BURNING.
pub fn validate_environment(chains: &EnvironmentConfig, environment: Environment) -> ValidationReport {
    let mut report = ValidationReport::default();

    if chains.is_empty() {
        report
            .warnings
            .push(format!("No chains configured for {environment}"));
        return report;
    }

    let mut locking_chains = Vec::new();
    let mut burning_count = 0;
    let mut missing_mode_chains = Vec::new();

    for (chain, config) in chains {
        let mut missing_fields = Vec::new();
        if config.rpc().is_none() {
            missing_fields.push("rpc");
        }
        if config.private_key().is_none() {
            missing_fields.push("privateKey");
        }
        if config.token_address().is_none() {
            missing_fields.push("tokenAddress");
        }
        if config.mode().is_none() {
            missing_fields.push("mode");
            missing_mode_chains.push(chain.as_str());
        }

        if !missing_fields.is_empty() {
            report.errors.push(format!(
                "Chain \"{chain}\" is missing required fields: {}",
                missing_fields.join(", ")
            ));
        }

        if let Some(mode) = config.mode() {
            match Mode::parse(mode) {
                Some(Mode::Locking) => locking_chains.push(chain.as_str()),
                Some(Mode::Burning) => burning_count += 1,
                None => report.errors.push(format!(
                    "Chain \"{chain}\" has invalid mode: {mode}. Must be LOCKING or BURNING"
                )),
            }
        }

        if let Some(key) = config.private_key() {
            if !is_env_reference(key) && key.chars().count() < MIN_PRIVATE_KEY_LENGTH {
                report.warnings.push(format!(
                    "Chain \"{chain}\" has a suspiciously short private key. Consider using environment variable syntax: ${{VAR_NAME}}"
                ));
            }
        }
    }

    match locking_chains.len() {
        0 => {}
        1 if burning_count == 0 => report.warnings.push(
            "Only one chain configured with LOCKING mode. Consider adding BURNING chains for a multichain deployment."
                .to_string(),
        ),
        1 => {}
        count => report.errors.push(format!(
            "Invalid configuration: {count} chains have LOCKING mode ({}). Only one chain can have LOCKING mode, all others must be BURNING.",
            locking_chains.join(", ")
        )),
    }

    if !missing_mode_chains.is_empty() && (!locking_chains.is_empty() || burning_count > 0) {
        report.errors.push(format!(
            "Some chains are missing mode configuration: {}",
            missing_mode_chains.join(", ")
        ));
    }

    report
}

pub fn validate_config(config: &DeploymentConfig) -> ConfigValidation {
    ConfigValidation {
        results: Environment::ALL
            .into_iter()
            .map(|env| (env, validate_environment(config.environment(env), env)))
            .collect(),
    }
}
