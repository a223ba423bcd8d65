//! # CLI Structure and Argument Parsing
//!
//! The `wpdisco` command line, built with `clap` derive macros.
//!
//! ```bash
//! # Find the API root and fetch the index
//! wpdisco discover https://example.com/
//!
//! # Only resolve the API root (exit code 2 when none is advertised)
//! wpdisco root https://example.com/ --legacy
//!
//! # Fetch an index from a known root
//! wpdisco index https://example.com/wp-json/ --format json
//!
//! # Inspect raw Link header segments
//! wpdisco parse-link '<https://example.com/wp-json/>; rel="https://api.w.org/"'
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Main CLI structure for the `wpdisco` command
#[derive(Parser, Clone, Debug)]
#[command(name = "wpdisco")]
#[command(version)]
#[command(about = "Discover WordPress REST API endpoints", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "WPDISCO_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Per-request timeout in seconds (overrides config)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Resolve the API root of a site and fetch its index
    Discover {
        /// Any page of the site, typically its home page
        uri: String,

        /// Also accept the pre-4.4 REST API plugin relation
        #[arg(long)]
        legacy: bool,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Resolve the API root only
    Root {
        /// Any page of the site, typically its home page
        uri: String,

        /// Also accept the pre-4.4 REST API plugin relation
        #[arg(long)]
        legacy: bool,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Fetch the index document from a known API root
    Index {
        /// API root URL, e.g. https://example.com/wp-json/
        url: String,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Parse Link header segments offline
    #[command(name = "parse-link")]
    ParseLink {
        /// Header segments; comma-joined values are split
        #[arg(required = true, value_name = "SEGMENT")]
        segments: Vec<String>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl Commands {
    /// The output format selected for this command.
    pub const fn format(&self) -> OutputFormat {
        match self {
            Self::Discover { format, .. }
            | Self::Root { format, .. }
            | Self::Index { format, .. }
            | Self::ParseLink { format, .. } => *format,
        }
    }
}
