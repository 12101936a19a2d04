use super::{Context, Status};
use crate::console::Console;
use crate::constants::Environment;
use crate::model::DeploymentConfig;
use crate::validator::{validate_config, validate_environment};
use anyhow::Result;
use std::io::Write;

pub fn validate<W: Write, E: Write>(
    ctx: &Context,
    env: Option<Environment>,
    console: &mut Console<W, E>,
) -> Result<Status> {
    let config = ctx.store.read()?;

    let Some(environment) = env else {
        return validate_all(&config, console);
    };

    let report = validate_environment(config.environment(environment), environment);

    console.blank()?;
    console.line(&format!("Validating {environment} configuration..."))?;
    console.blank()?;

    if !report.warnings.is_empty() {
        console.line("Warnings:")?;
        for warning in &report.warnings {
            console.line(&format!("  ⚠ {warning}"))?;
        }
        console.blank()?;
    }

    if !report.errors.is_empty() {
        console.line("Errors:")?;
        for error in &report.errors {
            console.line(&format!("  ✗ {error}"))?;
        }
        console.blank()?;
        console.line(&format!(
            "Validation failed for {environment}. Please fix the errors above."
        ))?;
        return Ok(Status::Failure);
    }

    if report.warnings.is_empty() {
        console.line(&format!("✓ {environment} configuration is valid"))?;
    } else {
        console.line(&format!("✓ {environment} configuration is valid (with warnings)"))?;
    }
    Ok(Status::Success)
}

fn validate_all<W: Write, E: Write>(
    config: &DeploymentConfig,
    console: &mut Console<W, E>,
) -> Result<Status> {
    let validation = validate_config(config);
    let mut has_warnings = false;

    console.blank()?;
    console.line("Validating all environments...")?;
    console.blank()?;

    for (environment, report) in &validation.results {
        console.line(&format!("{environment}:"))?;
        for warning in &report.warnings {
            console.line(&format!("  ⚠ {warning}"))?;
        }
        for error in &report.errors {
            console.line(&format!("  ✗ {error}"))?;
        }
        has_warnings |= !report.warnings.is_empty();

        if report.errors.is_empty() && report.warnings.is_empty() {
            if config.environment(*environment).is_empty() {
                console.line("  (not configured)")?;
            } else {
                console.line("  ✓ Valid")?;
            }
        }
        console.blank()?;
    }

    if !validation.is_valid() {
        console.line("Validation failed. Please fix the errors above.")?;
        return Ok(Status::Failure);
    }

    if has_warnings {
        console.line("✓ Configuration is valid (with warnings)")?;
    } else {
        console.line("✓ All configurations are valid")?;
    }
    Ok(Status::Success)
}
