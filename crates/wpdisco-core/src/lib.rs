//! # wpdisco-core
//!
//! Discovery of WordPress REST API endpoints.
//!
//! A WordPress site advertises the root of its REST API in the HTTP `Link`
//! header of its pages. This crate probes a site, picks that root out of the
//! header, fetches the API index document served there, and hands it back as
//! a [`Site`].
//!
//! ## Architecture
//!
//! - **Resolver** ([`resolver`]): one HEAD probe, `Link` header parsing, and
//!   relation selection (with optional legacy relation support)
//! - **Index fetcher** ([`index`]): one GET on the root and JSON decoding
//! - **Orchestration** ([`discover`]): resolver then fetcher
//! - **Transport** ([`http`]): the [`HttpClient`] trait and its reqwest
//!   implementation
//! - **Configuration** ([`config`]): TOML file plus `WPDISCO_*` overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # async fn run() -> wpdisco_core::Result<()> {
//! let site = wpdisco_core::discover("https://example.com/", false).await?;
//!
//! println!("{} serves its API at {}", site.name().unwrap_or("?"), site.index_url());
//! for namespace in site.namespaces() {
//!     println!("  {namespace}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Parsing a Link header segment
//!
//! ```rust
//! use wpdisco_core::parse_link_header;
//!
//! let attrs = parse_link_header(r#"<https://example.com/wp-json/>; rel="https://api.w.org/""#);
//! assert_eq!(attrs.href(), "https://example.com/wp-json/");
//! assert_eq!(attrs.rel(), Some("https://api.w.org/"));
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use wpdisco_core::Error;
//!
//! # async fn run() {
//! match wpdisco_core::discover("https://example.com/", false).await {
//!     Ok(site) => println!("found {}", site.index_url()),
//!     Err(Error::NotWordPress) => eprintln!("not a WordPress site"),
//!     Err(e) if e.is_recoverable() => eprintln!("temporary failure: {e}"),
//!     Err(e) => eprintln!("discovery failed: {e}"),
//! }
//! # }
//! ```

/// Configuration file and environment overrides
pub mod config;
/// Discovery entry points
pub mod discover;
/// Error types and result aliases
pub mod error;
/// HTTP transport abstraction
pub mod http;
/// API index retrieval
pub mod index;
/// `Link` header segment parsing
pub mod link;
/// API root resolution
pub mod resolver;
/// Discovered site description
pub mod site;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::{Config, DiscoveryConfig, HttpConfig};
pub use discover::{Discoverer, discover, discover_api_root, get_index_information};
pub use error::{Error, Result};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use link::{LinkAttributes, parse_link_header};
pub use resolver::{API_ROOT_REL, LEGACY_API_ROOT_REL};
pub use site::Site;
