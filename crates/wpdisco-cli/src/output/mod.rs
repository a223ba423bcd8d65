//! # Output Formatting
//!
//! Every command prints its result to stdout in one of two formats:
//!
//! - **Text**: labelled, human-readable lines (colored on a terminal)
//! - **JSON**: a single pretty-printed JSON document for scripts
//!
//! ```bash
//! wpdisco discover https://example.com/ --format json | jq '.index.namespaces'
//! ```
//!
//! Logs and errors always go to stderr, so stdout stays parseable.

mod json;
mod text;

use anyhow::Result;
use wpdisco_core::{LinkAttributes, Site};

/// Output format options supported by the CLI
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json)
    }
}

pub fn print_site(site: &Site, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", text::render_site(site));
            Ok(())
        },
        OutputFormat::Json => json::print(site),
    }
}

pub fn print_root(uri: &str, root: Option<&str>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if let Some(root) = root {
                println!("{root}");
            }
            Ok(())
        },
        OutputFormat::Json => json::print(&json::RootOutput { uri, root }),
    }
}

pub fn print_links(links: &[LinkAttributes], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", text::render_links(links));
            Ok(())
        },
        OutputFormat::Json => json::print(links),
    }
}
