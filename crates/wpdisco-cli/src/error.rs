//! CLI error handling with semantic exit codes.
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | | Command completed successfully |
//! | 1 | `Failure` | Transport, server, decode, config, or usage failure |
//! | 2 | `NotFound` | The site advertises no REST API root |
//!
//! ```bash
//! wpdisco root https://example.com/
//! case $? in
//!     0) echo "WordPress" ;;
//!     2) echo "Not WordPress" ;;
//!     *) echo "Discovery failed" ;;
//! esac
//! ```

use std::fmt;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Any failure other than "not found" (exit code 1).
    Failure = 1,

    /// No API root was advertised (exit code 2).
    NotFound = 2,
}

impl ErrorCategory {
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }
}

/// An error tagged with the category that decides the process exit code.
#[derive(Debug)]
pub struct CliError {
    category: ErrorCategory,
    source: anyhow::Error,
}

impl CliError {
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a not-found error.
    pub fn not_found(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::NotFound, source)
    }

    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Determine the exit code for an error returned by a command.
///
/// Explicit [`CliError`]s keep their category. A
/// [`wpdisco_core::Error::NotWordPress`] anywhere in the chain maps to
/// [`ErrorCategory::NotFound`]; everything else is a failure.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }

    let not_wordpress = err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<wpdisco_core::Error>(),
            Some(wpdisco_core::Error::NotWordPress)
        )
    });

    if not_wordpress {
        ErrorCategory::NotFound.exit_code()
    } else {
        ErrorCategory::Failure.exit_code()
    }
}
