//! API index retrieval.
//!
//! The index lives at the API root itself: a GET on the root returns a JSON
//! document describing the site, its namespaces, routes and authentication.

use crate::http::parse_request_url;
use crate::{Error, HttpClient, Result, Site};
use serde_json::Value;
use tracing::{debug, instrument};

/// Fetch and decode the index document served at `root_url`.
///
/// Issues one GET request. Any status other than `200` fails with
/// [`Error::Server`] carrying the status and body. A body that is not valid
/// JSON fails with [`Error::Decode`]. Any valid JSON value is accepted,
/// including `null` and `{}`.
///
/// # Errors
///
/// Also returns [`Error::InvalidUrl`] if `root_url` is not an absolute HTTP
/// URL, and [`Error::Transport`] if the request fails.
#[instrument(skip_all, fields(root = %root_url))]
pub async fn get_index_information<C>(client: &C, root_url: &str) -> Result<Site>
where
    C: HttpClient + ?Sized,
{
    parse_request_url(root_url)?;
    let response = client.get(root_url).await?;

    if response.status != 200 {
        debug!(status = response.status, "Index request returned non-200 status");
        return Err(Error::Server {
            status: response.status,
            body: response.body,
        });
    }

    let index: Value = serde_json::from_str(&response.body)?;
    debug!(bytes = response.body.len(), "Decoded API index");

    Ok(Site::new(index, root_url))
}
