//! `Link` response header parsing.
//!
//! A `Link` header lists related resources as comma-separated segments:
//!
//! ```text
//! Link: <https://example.com/wp-json/>; rel="https://api.w.org/", <https://example.com/?p=1>; rel=shortlink
//! ```
//!
//! [`split_link_header`] flattens one or more header values into individual
//! segments, and [`parse_link_header`] turns a single segment into a
//! [`LinkAttributes`] record. Parsing is deliberately lenient: malformed
//! parameters are skipped and a broken segment degrades to an `href`-only
//! record instead of failing.
//!
//! Only `href` and `rel` carry meaning for discovery. Other parameters
//! (`type`, `title`, ...) are kept verbatim but not interpreted.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Attribute key holding the link target.
pub const HREF: &str = "href";

/// Attribute key holding the relation type.
pub const REL: &str = "rel";

/// Attributes of one `Link` header segment.
///
/// Always has an `href` entry. Parameter names are stored exactly as they
/// appeared (after whitespace trimming); when a key occurs more than once the
/// last occurrence wins.
///
/// Serializes as a flat JSON object of attribute names to values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct LinkAttributes {
    attrs: BTreeMap<String, String>,
}

impl LinkAttributes {
    /// Create a record with only an `href`.
    pub fn new(href: impl Into<String>) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert(HREF.to_string(), href.into());
        Self { attrs }
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an attribute, returning the previous value for that key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.attrs.insert(key.into(), value.into())
    }

    /// The link target with angle brackets removed.
    pub fn href(&self) -> &str {
        self.get(HREF).unwrap_or_default()
    }

    /// The relation type, if the segment declared one.
    pub fn rel(&self) -> Option<&str> {
        self.get(REL)
    }

    /// Look up any attribute by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Number of attributes, `href` included.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Returns `true` if the record holds no attributes at all.
    ///
    /// Records produced by [`parse_link_header`] are never empty.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Borrow the underlying map.
    pub const fn as_map(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    /// Consume the record and return the underlying map.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.attrs
    }
}

impl From<LinkAttributes> for BTreeMap<String, String> {
    fn from(attrs: LinkAttributes) -> Self {
        attrs.attrs
    }
}

/// Renders the record back into header syntax: `<href>; key="value"; ...`.
///
/// Values are always quoted. Values that themselves contain `"`, `;` or `,`
/// cannot be represented faithfully in this simple syntax.
impl fmt::Display for LinkAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.href())?;
        for (key, value) in self.iter().filter(|(k, _)| *k != HREF) {
            write!(f, "; {key}=\"{value}\"")?;
        }
        Ok(())
    }
}

/// Parse a single `Link` header segment into its attributes.
///
/// The first `;`-separated part is the target: surrounding whitespace and one
/// pair of enclosing `<`/`>` are stripped. Every following part must look
/// like `key=value`; parts without `=` (or with an empty key) are skipped.
/// Keys are whitespace-trimmed, values are trimmed of whitespace and double
/// quotes.
///
/// This never fails.
///
/// # Examples
///
/// ```rust
/// use wpdisco_core::parse_link_header;
///
/// let attrs = parse_link_header(r#"<https://example.com/wp-json/>; rel="https://api.w.org/""#);
/// assert_eq!(attrs.href(), "https://example.com/wp-json/");
/// assert_eq!(attrs.rel(), Some("https://api.w.org/"));
/// ```
pub fn parse_link_header(segment: &str) -> LinkAttributes {
    let mut parts = segment.split(';');
    let target = parts.next().unwrap_or_default().trim();
    let target = target.strip_prefix('<').unwrap_or(target);
    let target = target.strip_suffix('>').unwrap_or(target);

    let mut attrs = LinkAttributes::new(target.trim());

    for part in parts {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let value = value.trim_matches(|c: char| c == '"' || c.is_whitespace());
        attrs.insert(key, value);
    }

    attrs
}

/// Flatten `Link` header values into individual segments.
///
/// Transports surface a repeated header either as one comma-joined string or
/// as several values; a single header is just a one-element iterator. Every
/// value is split on `,` and the pieces are concatenated in order. An absent
/// header (empty iterator) yields no segments.
///
/// ```rust
/// use wpdisco_core::link::split_link_header;
///
/// let segments = split_link_header(["<a>; rel=one, <b>; rel=two", "<c>; rel=three"]);
/// assert_eq!(segments.len(), 3);
/// ```
pub fn split_link_header<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .flat_map(|value| {
            value
                .as_ref()
                .split(',')
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}
