//! `wpdisco index`

use anyhow::Result;
use wpdisco_core::Config;

use crate::output::{self, OutputFormat};

pub async fn execute(config: &Config, url: &str, format: OutputFormat) -> Result<()> {
    let site = super::discoverer(config)?.get_index_information(url).await?;
    output::print_site(&site, format)
}
