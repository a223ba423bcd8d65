//! API root resolution.
//!
//! WordPress advertises its REST API root on every front-end response:
//!
//! ```text
//! Link: <https://example.com/wp-json/>; rel="https://api.w.org/"
//! ```
//!
//! Sites running the pre-core REST API plugin (WordPress < 4.4) used a
//! different relation, `https://github.com/WP-API/WP-API`. That relation is
//! only honored in legacy mode.
//!
//! ## Selection
//!
//! Header segments are visited in order. For each segment the rules in
//! [`API_ROOT_RULES`] are checked top to bottom; the first segment accepted by
//! any rule wins. Segments without a `rel`, or with an unrelated one, are
//! skipped.

use crate::http::parse_request_url;
use crate::link::{parse_link_header, split_link_header};
use crate::{Error, HttpClient, Result};
use tracing::{debug, instrument};
use url::Url;

/// Relation identifying the REST API root.
pub const API_ROOT_REL: &str = "https://api.w.org/";

/// Relation used by the REST API plugin before it was merged into core.
pub const LEGACY_API_ROOT_REL: &str = "https://github.com/WP-API/WP-API";

/// Name of the response header carrying link relations.
pub const LINK_HEADER: &str = "link";

/// One entry of the relation selection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationRule {
    /// Relation value this rule matches exactly.
    pub rel: &'static str,
    /// Whether the rule only applies in legacy mode.
    pub legacy_only: bool,
}

impl RelationRule {
    /// Whether this rule selects a segment with relation `rel`.
    pub fn accepts(&self, rel: &str, legacy: bool) -> bool {
        self.rel == rel && (legacy || !self.legacy_only)
    }
}

/// Relations that identify an API root, in priority order.
pub const API_ROOT_RULES: &[RelationRule] = &[
    RelationRule {
        rel: API_ROOT_REL,
        legacy_only: false,
    },
    RelationRule {
        rel: LEGACY_API_ROOT_REL,
        legacy_only: true,
    },
];

/// Pick the API root `href` out of raw `Link` header values.
///
/// `header_values` may hold a single (possibly comma-joined) header or one
/// entry per repeated header. Returns `None` when no segment matches.
///
/// ```rust
/// use wpdisco_core::resolver::select_api_root;
///
/// let header = r#"<https://example.com/?p=1>; rel=shortlink, <https://example.com/wp-json/>; rel="https://api.w.org/""#;
/// assert_eq!(
///     select_api_root([header], false).as_deref(),
///     Some("https://example.com/wp-json/")
/// );
/// ```
pub fn select_api_root<I, S>(header_values: I, legacy: bool) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    split_link_header(header_values)
        .iter()
        .map(|segment| parse_link_header(segment))
        .find_map(|attrs| {
            let rel = attrs.rel()?;
            if API_ROOT_RULES.iter().any(|rule| rule.accepts(rel, legacy)) {
                debug!(rel = %rel, href = %attrs.href(), "Selected API root relation");
                Some(attrs.href().to_string())
            } else {
                debug!(rel = %rel, "Skipping link relation");
                None
            }
        })
}

/// Find the API root advertised by `uri`.
///
/// Issues one HEAD request through `client`. Returns:
///
/// - `Ok(Some(root))` when an API root relation was found
/// - `Ok(None)` when the response carries no matching relation
/// - `Err(Error::Server { .. })` when the status is not `200`
/// - `Err(Error::Transport(..))` when the request itself failed
///
/// Absolute `href` values are returned exactly as advertised. A relative
/// `href` is NOT returned raw: it is resolved against `uri`, so
/// `</wp-json/>` probed at `https://example.com/blog/` yields
/// `https://example.com/wp-json/`. Use [`select_api_root`] on the header
/// values to get the unresolved `href`.
#[instrument(skip_all, fields(uri = %uri, legacy = legacy))]
pub async fn discover_api_root<C>(client: &C, uri: &str, legacy: bool) -> Result<Option<String>>
where
    C: HttpClient + ?Sized,
{
    let base = parse_request_url(uri)?;
    let response = client.head(uri).await?;

    if response.status != 200 {
        debug!(status = response.status, "Probe returned non-200 status");
        return Err(Error::Server {
            status: response.status,
            body: response.body,
        });
    }

    let root = select_api_root(response.header_values(LINK_HEADER), legacy)
        .map(|href| resolve_href(&base, href));

    match &root {
        Some(root) => debug!(root = %root, "Found API root"),
        None => debug!("No API root relation advertised"),
    }

    Ok(root)
}

/// Resolve a link target against the probed URL.
///
/// Absolute and empty targets are returned unchanged.
fn resolve_href(base: &Url, href: String) -> String {
    if href.is_empty() || Url::parse(&href).is_ok() {
        return href;
    }
    base.join(&href).map_or(href, |resolved| resolved.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::disallowed_macros)]
mod tests {
    use super::*;
    use crate::testing::MockClient;
    use crate::HttpResponse;
    use std::io;

    const SITE: &str = "https://example.com/";
    const ROOT: &str = "https://example.com/wp-json/";

    fn probe(link: &str) -> HttpResponse {
        HttpResponse::new(200, "").with_header("Link", link)
    }

    #[test]
    fn test_rule_table_order() {
        assert_eq!(API_ROOT_RULES[0].rel, API_ROOT_REL);
        assert!(!API_ROOT_RULES[0].legacy_only);
        assert_eq!(API_ROOT_RULES[1].rel, LEGACY_API_ROOT_REL);
        assert!(API_ROOT_RULES[1].legacy_only);
    }

    #[test]
    fn test_rule_accepts() {
        let legacy_rule = API_ROOT_RULES[1];
        assert!(!legacy_rule.accepts(LEGACY_API_ROOT_REL, false));
        assert!(legacy_rule.accepts(LEGACY_API_ROOT_REL, true));
        assert!(!legacy_rule.accepts(API_ROOT_REL, true));
        assert!(API_ROOT_RULES[0].accepts(API_ROOT_REL, false));
        assert!(API_ROOT_RULES[0].accepts(API_ROOT_REL, true));
    }

    #[test]
    fn test_select_first_matching_segment_regardless_of_position() {
        let header = format!(
            "<https://example.com/?p=1>; rel=shortlink, <https://example.com/feed/>; rel=alternate, <{ROOT}>; rel=\"{API_ROOT_REL}\""
        );
        assert_eq!(select_api_root([header], false).as_deref(), Some(ROOT));
    }

    #[test]
    fn test_select_first_of_two_api_roots() {
        let header = format!(
            "<https://a.example.com/wp-json/>; rel=\"{API_ROOT_REL}\", <https://b.example.com/wp-json/>; rel=\"{API_ROOT_REL}\""
        );
        assert_eq!(
            select_api_root([header], false).as_deref(),
            Some("https://a.example.com/wp-json/")
        );
    }

    #[test]
    fn test_select_legacy_gated() {
        let header = format!("<{ROOT}>; rel=\"{LEGACY_API_ROOT_REL}\"");

        assert_eq!(select_api_root([header.as_str()], false), None);
        assert_eq!(select_api_root([header.as_str()], true).as_deref(), Some(ROOT));
    }

    #[test]
    fn test_select_header_order_beats_rule_order() {
        // Legacy segment comes first; in legacy mode it wins.
        let header = format!(
            "<https://example.com/legacy/>; rel=\"{LEGACY_API_ROOT_REL}\", <{ROOT}>; rel=\"{API_ROOT_REL}\""
        );

        assert_eq!(
            select_api_root([header.as_str()], true).as_deref(),
            Some("https://example.com/legacy/")
        );
        assert_eq!(select_api_root([header.as_str()], false).as_deref(), Some(ROOT));
    }

    #[test]
    fn test_select_across_repeated_headers() {
        let values = vec![
            "<https://example.com/?p=1>; rel=shortlink".to_string(),
            format!("<{ROOT}>; rel=\"{API_ROOT_REL}\""),
        ];
        assert_eq!(select_api_root(values, false).as_deref(), Some(ROOT));
    }

    #[test]
    fn test_select_skips_malformed_segments() {
        let header = format!("garbage, <nope>; rel, ; =x, <{ROOT}>; rel={API_ROOT_REL}");
        assert_eq!(select_api_root([header], false).as_deref(), Some(ROOT));
    }

    #[test]
    fn test_select_rel_match_is_exact() {
        for rel in ["https://api.w.org", "HTTPS://API.W.ORG/", "https://api.w.org/ extra"] {
            let header = format!("<{ROOT}>; rel=\"{rel}\"");
            assert_eq!(select_api_root([header], false), None, "{rel}");
        }
    }

    #[test]
    fn test_select_no_headers() {
        assert_eq!(select_api_root(Vec::<&str>::new(), true), None);
    }

    #[test]
    fn test_resolve_href() {
        let base = Url::parse("https://example.com/blog/post").unwrap();

        assert_eq!(resolve_href(&base, ROOT.to_string()), ROOT);
        assert_eq!(
            resolve_href(&base, "/wp-json/".to_string()),
            "https://example.com/wp-json/"
        );
        assert_eq!(
            resolve_href(&base, "wp-json/".to_string()),
            "https://example.com/blog/wp-json/"
        );
        assert_eq!(resolve_href(&base, String::new()), "");
    }

    #[tokio::test]
    async fn test_discover_api_root_found() {
        let client = MockClient::new().on_head(SITE, probe(&format!("<{ROOT}>; rel=\"{API_ROOT_REL}\"")));

        let root = discover_api_root(&client, SITE, false).await.unwrap();

        assert_eq!(root.as_deref(), Some(ROOT));
        assert_eq!(client.calls(), [("HEAD", SITE.to_string())]);
    }

    #[tokio::test]
    async fn test_discover_api_root_absolute_href_is_verbatim() {
        // Not normalized by the URL parser (no trailing slash added, query kept).
        let advertised = "https://example.com/?rest_route=";
        let client = MockClient::new().on_head(SITE, probe(&format!("<{advertised}>; rel=\"{API_ROOT_REL}\"")));

        let root = discover_api_root(&client, SITE, false).await.unwrap();

        assert_eq!(root.as_deref(), Some(advertised));
    }

    #[tokio::test]
    async fn test_discover_api_root_legacy_only_header() {
        let link = format!("<{ROOT}>; rel=\"{LEGACY_API_ROOT_REL}\"");
        let client = MockClient::new().on_head(SITE, probe(&link));

        assert_eq!(discover_api_root(&client, SITE, false).await.unwrap(), None);
        assert_eq!(
            discover_api_root(&client, SITE, true).await.unwrap().as_deref(),
            Some(ROOT)
        );
    }

    #[tokio::test]
    async fn test_discover_api_root_no_link_header() {
        let client = MockClient::new().on_head(SITE, HttpResponse::new(200, ""));

        assert_eq!(discover_api_root(&client, SITE, false).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_discover_api_root_server_error_embeds_body() {
        let client = MockClient::new().on_head(SITE, HttpResponse::new(404, "Page not found"));

        let err = discover_api_root(&client, SITE, false).await.unwrap_err();

        match &err {
            Error::Server { status, body } => {
                assert_eq!(*status, 404);
                assert_eq!(body, "Page not found");
            },
            other => panic!("expected server error, got {other:?}"),
        }
        assert!(err.to_string().contains("Page not found"));
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_discover_api_root_non_200_success_is_error() {
        let client = MockClient::new().on_head(SITE, HttpResponse::new(204, ""));

        let err = discover_api_root(&client, SITE, false).await.unwrap_err();

        assert!(matches!(err, Error::Server { status: 204, .. }));
        assert_eq!(err.to_string(), "Server returned error code 204: ");
    }

    #[tokio::test]
    async fn test_discover_api_root_transport_error() {
        let client = MockClient::new().fail_head(SITE, io::ErrorKind::TimedOut);

        let err = discover_api_root(&client, SITE, false).await.unwrap_err();

        assert_eq!(err.category(), "transport");
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_discover_api_root_rejects_padded_uri() {
        let client = MockClient::new().on_head(SITE, probe(&format!("<{ROOT}>; rel=\"{API_ROOT_REL}\"")));

        let err = discover_api_root(&client, " https://example.com/ ", false)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidUrl(_)));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_discover_api_root_invalid_uri_makes_no_request() {
        let client = MockClient::new();

        let err = discover_api_root(&client, "not a url", false).await.unwrap_err();

        assert!(matches!(err, Error::InvalidUrl(_)));
        assert!(client.calls().is_empty());
    }
}
