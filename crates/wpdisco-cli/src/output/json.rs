//! JSON output formatting

use anyhow::Result;
use serde::Serialize;

/// Result of `wpdisco root`.
#[derive(Debug, Serialize)]
pub struct RootOutput<'a> {
    pub uri: &'a str,
    pub root: Option<&'a str>,
}

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
