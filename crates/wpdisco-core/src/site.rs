//! The result of a successful discovery.
//!
//! A [`Site`] pairs the decoded API index document with the root URL it was
//! fetched from. The document shape belongs to the remote API, so it is kept
//! as a raw [`serde_json::Value`]; the accessors below read the fields a
//! WordPress index normally carries and return `None`/empty when a field is
//! missing or has an unexpected type.
//!
//! A typical index looks like:
//!
//! ```json
//! {
//!   "name": "Test Site",
//!   "description": "Just another WordPress site",
//!   "url": "https://example.com",
//!   "home": "https://example.com",
//!   "namespaces": ["oembed/1.0", "wp/v2"],
//!   "authentication": { "oauth1": { "request": "...", "authorize": "..." } },
//!   "routes": { "/": { ... }, "/wp/v2/posts": { ... } }
//! }
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

/// A discovered API: its index document and the root URL used to fetch it.
///
/// Only [`get_index_information`](crate::get_index_information) creates a
/// `Site`, and only from a `200` response whose body decoded successfully.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    index: Value,
    index_url: String,
}

impl Site {
    /// Pair a decoded index document with the root URL it came from.
    pub(crate) fn new(index: Value, index_url: impl Into<String>) -> Self {
        Self {
            index,
            index_url: index_url.into(),
        }
    }

    /// The raw index document.
    pub const fn index(&self) -> &Value {
        &self.index
    }

    /// The API root URL the index was fetched from, exactly as resolved.
    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    /// Split into the raw document and the root URL.
    pub fn into_parts(self) -> (Value, String) {
        (self.index, self.index_url)
    }

    /// Site title (`name`).
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// Site tagline (`description`).
    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    /// WordPress address (`url`).
    pub fn url(&self) -> Option<&str> {
        self.str_field("url")
    }

    /// Public site address (`home`).
    pub fn home(&self) -> Option<&str> {
        self.str_field("home")
    }

    /// Registered API namespaces, e.g. `wp/v2`.
    pub fn namespaces(&self) -> Vec<&str> {
        self.index
            .get("namespaces")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether the API registers `namespace`.
    pub fn supports_namespace(&self, namespace: &str) -> bool {
        self.namespaces().contains(&namespace)
    }

    /// Route paths exposed by the API.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.index
            .get("routes")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|routes| routes.keys().map(String::as_str))
    }

    /// Whether the API exposes `route`.
    pub fn has_route(&self, route: &str) -> bool {
        self.index
            .get("routes")
            .and_then(Value::as_object)
            .is_some_and(|routes| routes.contains_key(route))
    }

    /// Authentication methods advertised by the index, keyed by method name.
    pub fn authentication(&self) -> Option<&Map<String, Value>> {
        self.index.get("authentication").and_then(Value::as_object)
    }

    /// Whether the index advertises authentication `method` (e.g. `oauth1`,
    /// `application-passwords`).
    pub fn supports_authentication(&self, method: &str) -> bool {
        self.authentication()
            .is_some_and(|methods| methods.contains_key(method))
    }

    /// Method-specific authentication data, e.g. the OAuth endpoints.
    pub fn authentication_data(&self, method: &str) -> Option<&Value> {
        self.authentication().and_then(|methods| methods.get(method))
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.index.get(key).and_then(Value::as_str)
    }
}
