//! In-memory [`HttpClient`] double for unit tests.

#![allow(clippy::unwrap_used)]

use crate::{Error, HttpClient, HttpResponse, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

enum Reply {
    Response(HttpResponse),
    Fail(io::ErrorKind),
}

/// Serves canned replies keyed by `(method, url)` and records every call.
///
/// Requests with no canned reply fail with a transport error.
#[derive(Default)]
pub struct MockClient {
    replies: HashMap<(&'static str, String), Reply>,
    calls: Mutex<Vec<(&'static str, String)>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_head(mut self, url: &str, response: HttpResponse) -> Self {
        self.replies
            .insert(("HEAD", url.to_string()), Reply::Response(response));
        self
    }

    pub fn on_get(mut self, url: &str, response: HttpResponse) -> Self {
        self.replies
            .insert(("GET", url.to_string()), Reply::Response(response));
        self
    }

    pub fn fail_head(mut self, url: &str, kind: io::ErrorKind) -> Self {
        self.replies.insert(("HEAD", url.to_string()), Reply::Fail(kind));
        self
    }

    pub fn fail_get(mut self, url: &str, kind: io::ErrorKind) -> Self {
        self.replies.insert(("GET", url.to_string()), Reply::Fail(kind));
        self
    }

    pub fn calls(&self) -> Vec<(&'static str, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn reply(&self, method: &'static str, url: &str) -> Result<HttpResponse> {
        self.calls.lock().unwrap().push((method, url.to_string()));
        match self.replies.get(&(method, url.to_string())) {
            Some(Reply::Response(response)) => Ok(response.clone()),
            Some(Reply::Fail(kind)) => Err(Error::transport(io::Error::new(
                *kind,
                format!("{method} {url} failed"),
            ))),
            None => Err(Error::transport(format!("no reply for {method} {url}"))),
        }
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn head(&self, url: &str) -> Result<HttpResponse> {
        self.reply("HEAD", url)
    }

    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.reply("GET", url)
    }
}
