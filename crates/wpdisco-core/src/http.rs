//! HTTP transport used by discovery.
//!
//! Discovery only needs two request shapes: a HEAD probe whose headers are
//! inspected, and a GET whose body is decoded. [`HttpClient`] captures exactly
//! that, so the resolver and fetcher can run against any transport.
//! [`ReqwestClient`] is the default implementation.
//!
//! Implementations must report network-level failures as
//! [`Error::Transport`] and must NOT turn non-2xx statuses into errors: status
//! handling belongs to the caller.

use crate::config::HttpConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// A completed HTTP exchange, independent of the transport that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpResponse {
    /// Response status code.
    pub status: u16,
    /// Response headers in arrival order. Repeated headers appear once per
    /// occurrence.
    pub headers: Vec<(String, String)>,
    /// Response body decoded as text (empty for HEAD responses).
    pub body: String,
}

impl HttpResponse {
    /// Create a response with no headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Builder-style header append. Calling it twice with the same name
    /// produces a repeated header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// All values of a header, matched case-insensitively, in arrival order.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Check that `url` is a non-empty absolute `http`/`https` URL.
///
/// Surrounding whitespace is rejected rather than trimmed, so the string
/// that is validated is the one sent and stored.
pub(crate) fn parse_request_url(url: &str) -> Result<Url> {
    if url.trim().is_empty() {
        return Err(Error::InvalidUrl("URL must not be empty".to_string()));
    }
    if url.trim() != url {
        return Err(Error::InvalidUrl(format!(
            "'{url}': surrounding whitespace"
        )));
    }
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("'{url}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::InvalidUrl(format!(
            "'{url}': unsupported scheme '{other}'"
        ))),
    }
}

/// The HTTP operations discovery depends on.
///
/// Implementations must be safe to share between concurrent discovery calls.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a HEAD request.
    async fn head(&self, url: &str) -> Result<HttpResponse>;

    /// Issue a GET request.
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for &T {
    async fn head(&self, url: &str) -> Result<HttpResponse> {
        (**self).head(url).await
    }

    async fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url).await
    }
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for std::sync::Arc<T> {
    async fn head(&self, url: &str) -> Result<HttpResponse> {
        (**self).head(url).await
    }

    async fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url).await
    }
}

/// [`HttpClient`] backed by `reqwest`.
///
/// Redirects are followed by reqwest itself, so the status seen by discovery
/// is the status of the final hop.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// Creates a client with the default [`HttpConfig`].
    pub fn new() -> Result<Self> {
        Self::from_config(&HttpConfig::default())
    }

    /// Creates a client with a custom request timeout (primarily for tests).
    ///
    /// Sub-second timeouts are kept as given.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::build(&HttpConfig::default(), timeout)
    }

    /// Creates a client from explicit settings.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        Self::build(config, config.timeout())
    }

    fn build(config: &HttpConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured `reqwest::Client`.
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }

    async fn collect_response(response: reqwest::Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn head(&self, url: &str) -> Result<HttpResponse> {
        debug!(url = %url, "HEAD");
        let response = self.client.head(url).send().await.map_err(Error::from)?;
        Self::collect_response(response).await
    }

    async fn get(&self, url: &str) -> Result<HttpResponse> {
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await.map_err(Error::from)?;
        Self::collect_response(response).await
    }
}
