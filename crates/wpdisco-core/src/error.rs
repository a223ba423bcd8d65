//! Error types and handling for wpdisco-core operations.
//!
//! Every failure in a discovery run is reported as exactly one [`Error`] value.
//! Errors are returned to the caller as produced: the orchestrator never wraps
//! a resolver or fetcher error in another layer. The only error it introduces
//! itself is [`Error::NotWordPress`].
//!
//! ## Error Categories
//!
//! - **Transport**: the HTTP call itself failed (DNS, connect, TLS, timeout)
//! - **Server**: the request completed but the status was not `200`
//! - **Decode**: the index body was not valid JSON
//! - **Not WordPress**: the probe succeeded but no API relation was advertised
//! - **Invalid URL / Config**: bad input before any request is made
//!
//! ## Recovery Hints
//!
//! The core never retries. [`Error::is_recoverable`] lets callers decide
//! whether a retry of their own is worthwhile:
//!
//! ```rust
//! use wpdisco_core::Error;
//!
//! let err = Error::Server { status: 503, body: "maintenance".into() };
//! assert!(err.is_recoverable());
//! assert_eq!(err.category(), "server-error");
//!
//! let err = Error::NotWordPress;
//! assert!(!err.is_recoverable());
//! ```

use thiserror::Error;

/// Boxed cause carried by [`Error::Transport`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for wpdisco-core operations.
///
/// ## Display vs Debug
///
/// - `Display` provides the human-readable message
/// - `Debug` includes the full transport cause
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying network call failed.
    ///
    /// Produced by [`HttpClient`](crate::HttpClient) implementations for DNS
    /// failures, refused connections, TLS errors, and timeouts. The original
    /// cause is preserved and available through `source()`.
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// The server answered with a status other than `200`.
    ///
    /// The raw response body is kept for diagnostics, even when empty.
    #[error("Server returned error code {status}: {body}")]
    Server {
        /// HTTP status code of the response.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// The index response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Decode(String),

    /// The probe succeeded but the resource does not advertise an API root.
    ///
    /// This is a classification, not a protocol failure. Retrying will not
    /// change the outcome.
    #[error("This site is not a WordPress site.")]
    NotWordPress,

    /// The input URI is empty, relative, or not an `http`/`https` URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration could not be read or contains invalid values.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl Error {
    /// Wrap any transport-level failure.
    ///
    /// Custom [`HttpClient`](crate::HttpClient) implementations use this to
    /// report their own error types.
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Transport(err.into())
    }

    /// Check if the error might go away if the caller retries later.
    ///
    /// - Transport timeouts and connection failures are recoverable.
    /// - Server errors in the `5xx` range and `429 Too Many Requests` are
    ///   recoverable.
    /// - Everything else (decode failures, `NotWordPress`, bad input) is
    ///   permanent.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Transport(cause) => {
                if let Some(e) = cause.downcast_ref::<reqwest::Error>() {
                    return e.is_timeout() || e.is_connect();
                }
                cause.downcast_ref::<std::io::Error>().is_some_and(|e| {
                    matches!(
                        e.kind(),
                        std::io::ErrorKind::TimedOut
                            | std::io::ErrorKind::Interrupted
                            | std::io::ErrorKind::ConnectionRefused
                            | std::io::ErrorKind::ConnectionReset
                    )
                })
            },
            Self::Server { status, .. } => *status == 429 || (500..600).contains(status),
            Self::Decode(_) | Self::NotWordPress | Self::InvalidUrl(_) | Self::Config(_) => false,
        }
    }

    /// Machine-readable kind of the error.
    ///
    /// - `"transport"` - network call failed
    /// - `"server-error"` - non-200 response
    /// - `"json-decode-error"` - index body is not JSON
    /// - `"not-a-wordpress-site"` - no API relation advertised
    /// - `"invalid-url"` - bad input URI
    /// - `"config"` - configuration problem
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Server { .. } => "server-error",
            Self::Decode(_) => "json-decode-error",
            Self::NotWordPress => "not-a-wordpress-site",
            Self::InvalidUrl(_) => "invalid-url",
            Self::Config(_) => "config",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(
    clippy::panic,
    clippy::disallowed_macros,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::unnecessary_wraps
)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_server_error_message_embeds_status_and_body() {
        let err = Error::Server {
            status: 404,
            body: "<h1>Not Found</h1>".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Server returned error code 404: <h1>Not Found</h1>"
        );
    }

    #[test]
    fn test_server_error_message_keeps_empty_body() {
        let err = Error::Server {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Server returned error code 500: ");
    }

    #[test]
    fn test_not_wordpress_message() {
        assert_eq!(
            Error::NotWordPress.to_string(),
            "This site is not a WordPress site."
        );
    }

    #[test]
    fn test_transport_preserves_source() {
        let err = Error::transport(io::Error::new(io::ErrorKind::TimedOut, "dns timeout"));
        assert!(err.to_string().contains("dns timeout"));

        let source = err.source().expect("transport error should expose its cause");
        assert!(source.downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn test_decode_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.category(), "json-decode-error");
        assert!(err.to_string().starts_with("JSON decode error:"));
    }

    #[test]
    fn test_error_categories() {
        let error_categories = vec![
            (Error::transport(io::Error::other("x")), "transport"),
            (
                Error::Server {
                    status: 404,
                    body: String::new(),
                },
                "server-error",
            ),
            (Error::Decode("x".to_string()), "json-decode-error"),
            (Error::NotWordPress, "not-a-wordpress-site"),
            (Error::InvalidUrl("x".to_string()), "invalid-url"),
            (Error::Config("x".to_string()), "config"),
        ];

        for (error, expected_category) in error_categories {
            assert_eq!(error.category(), expected_category);
        }
    }

    #[test]
    fn test_error_recoverability() {
        let recoverable_errors = vec![
            Error::transport(io::Error::new(io::ErrorKind::TimedOut, "timeout")),
            Error::transport(io::Error::new(io::ErrorKind::ConnectionRefused, "refused")),
            Error::Server {
                status: 503,
                body: String::new(),
            },
            Error::Server {
                status: 429,
                body: String::new(),
            },
        ];

        let non_recoverable_errors = vec![
            Error::transport(io::Error::new(io::ErrorKind::InvalidData, "bad tls")),
            Error::transport("opaque failure"),
            Error::Server {
                status: 404,
                body: String::new(),
            },
            Error::Decode("bad json".to_string()),
            Error::NotWordPress,
            Error::InvalidUrl("nope".to_string()),
            Error::Config("bad".to_string()),
        ];

        for error in recoverable_errors {
            assert!(
                error.is_recoverable(),
                "Expected {error:?} to be recoverable"
            );
        }
        for error in non_recoverable_errors {
            assert!(
                !error.is_recoverable(),
                "Expected {error:?} to be non-recoverable"
            );
        }
    }
}
