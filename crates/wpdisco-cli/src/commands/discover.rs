//! `wpdisco discover`

use anyhow::Result;
use tracing::info;
use wpdisco_core::Config;

use crate::output::{self, OutputFormat};

/// Resolve the API root of `uri`, fetch its index, and print the result.
///
/// `--legacy` and `discovery.legacy` in the config both enable the legacy
/// relation. A site without an API root surfaces as
/// [`wpdisco_core::Error::NotWordPress`], which maps to exit code 2.
pub async fn execute(config: &Config, uri: &str, legacy: bool, format: OutputFormat) -> Result<()> {
    let legacy = legacy || config.discovery.legacy;
    let site = super::discoverer(config)?.discover(uri, legacy).await?;

    info!(root = %site.index_url(), "Discovered API root");
    output::print_site(&site, format)
}
