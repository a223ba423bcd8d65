//! `wpdisco parse-link`

use anyhow::Result;
use wpdisco_core::link::split_link_header;
use wpdisco_core::{LinkAttributes, parse_link_header};

use crate::output::{self, OutputFormat};

/// Parse every segment of the given header values and print the records.
///
/// Blank segments (e.g. from a trailing comma) are dropped.
pub fn execute(values: &[String], format: OutputFormat) -> Result<()> {
    output::print_links(&parse_all(values), format)
}

fn parse_all(values: &[String]) -> Vec<LinkAttributes> {
    split_link_header(values)
        .iter()
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| parse_link_header(segment))
        .collect()
}
