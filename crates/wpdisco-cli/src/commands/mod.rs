//! Command implementations for the wpdisco CLI

mod discover;
mod index;
mod link;
mod root;

pub use discover::execute as discover;
pub use index::execute as show_index;
pub use link::execute as parse_links;
pub use root::execute as find_root;

use anyhow::{Context, Result};
use wpdisco_core::{Config, Discoverer, ReqwestClient};

fn discoverer(config: &Config) -> Result<Discoverer<ReqwestClient>> {
    let client =
        ReqwestClient::from_config(&config.http).context("Failed to build HTTP client")?;
    Ok(Discoverer::new(client))
}
