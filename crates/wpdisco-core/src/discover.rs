//! Discovery entry points.
//!
//! [`Discoverer`] chains the resolver and the index fetcher over an injected
//! [`HttpClient`]. The free functions in this module do the same with a
//! default [`ReqwestClient`], for callers that don't need to configure the
//! transport.
//!
//! ```rust,no_run
//! use wpdisco_core::{Discoverer, Error, ReqwestClient};
//!
//! # async fn run() -> wpdisco_core::Result<()> {
//! let discoverer = Discoverer::new(ReqwestClient::new()?);
//!
//! match discoverer.discover("https://example.com/", false).await {
//!     Ok(site) => println!("{} -> {}", site.name().unwrap_or("?"), site.index_url()),
//!     Err(Error::NotWordPress) => println!("not a WordPress site"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use crate::{index, resolver};
use crate::{Error, HttpClient, ReqwestClient, Result, Site};
use tracing::{debug, instrument};

/// Runs discovery against one transport.
///
/// Holds nothing but the client, so a single `Discoverer` can serve
/// concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct Discoverer<C> {
    client: C,
}

impl<C: HttpClient> Discoverer<C> {
    /// Wrap a transport.
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// The wrapped transport.
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Unwrap the transport.
    pub fn into_client(self) -> C {
        self.client
    }

    /// Resolve the API root of `uri` and fetch its index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotWordPress`] when the probe succeeds but no API
    /// root relation is advertised. Resolver and fetcher errors are returned
    /// unchanged.
    #[instrument(skip_all, fields(uri = %uri, legacy = legacy))]
    pub async fn discover(&self, uri: &str, legacy: bool) -> Result<Site> {
        let root = match self.discover_api_root(uri, legacy).await? {
            Some(root) if !root.is_empty() => root,
            _ => {
                debug!("No API root found");
                return Err(Error::NotWordPress);
            },
        };

        self.get_index_information(&root).await
    }

    /// See [`resolver::discover_api_root`].
    pub async fn discover_api_root(&self, uri: &str, legacy: bool) -> Result<Option<String>> {
        resolver::discover_api_root(&self.client, uri, legacy).await
    }

    /// See [`index::get_index_information`].
    pub async fn get_index_information(&self, root_url: &str) -> Result<Site> {
        index::get_index_information(&self.client, root_url).await
    }
}

fn default_discoverer() -> Result<Discoverer<ReqwestClient>> {
    Ok(Discoverer::new(ReqwestClient::new()?))
}

/// [`Discoverer::discover`] with a default client.
pub async fn discover(uri: &str, legacy: bool) -> Result<Site> {
    default_discoverer()?.discover(uri, legacy).await
}

/// [`Discoverer::discover_api_root`] with a default client.
pub async fn discover_api_root(uri: &str, legacy: bool) -> Result<Option<String>> {
    default_discoverer()?.discover_api_root(uri, legacy).await
}

/// [`Discoverer::get_index_information`] with a default client.
pub async fn get_index_information(root_url: &str) -> Result<Site> {
    default_discoverer()?.get_index_information(root_url).await
}
