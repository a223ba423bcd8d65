//! `wpdisco root`

use anyhow::{Result, anyhow};
use wpdisco_core::Config;

use crate::error::CliError;
use crate::output::{self, OutputFormat};

pub async fn execute(config: &Config, uri: &str, legacy: bool, format: OutputFormat) -> Result<()> {
    let legacy = legacy || config.discovery.legacy;
    let root = super::discoverer(config)?
        .discover_api_root(uri, legacy)
        .await?;

    output::print_root(uri, root.as_deref(), format)?;

    match root {
        Some(_) => Ok(()),
        None => Err(CliError::not_found(anyhow!("{uri} does not advertise a REST API root")).into()),
    }
}
