//! Resolve the effective configuration from file, environment, and flags.

use anyhow::{Context, Result};
use tracing::debug;
use wpdisco_core::Config;

use crate::cli::Cli;

/// Load the config named by `--config`/`WPDISCO_CONFIG`, or the default
/// location, then apply `--timeout`.
///
/// Precedence, lowest first: defaults, file, `WPDISCO_*` variables, flags.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    let config = apply_flags(config, cli)?;
    debug!(?config, "Effective configuration");
    Ok(config)
}

fn apply_flags(mut config: Config, cli: &Cli) -> Result<Config> {
    if let Some(timeout) = cli.timeout {
        config.http.timeout_secs = timeout;
    }
    config.validate().context("Invalid --timeout")?;
    Ok(config)
}
