#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use anyhow::Result;
use common::{API_ROOT_REL, link, wpdisco_cmd};
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn wordpress_site() -> MockServer {
    let server = MockServer::start().await;
    let root = format!("{}/wp-json/", server.uri());

    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link(&root, API_ROOT_REL).as_str()),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Test Site",
            "description": "Just another WordPress site",
            "url": server.uri(),
            "home": server.uri(),
            "namespaces": ["oembed/1.0", "wp/v2"],
            "authentication": { "application-passwords": {} },
            "routes": { "/": {}, "/wp/v2/posts": {} }
        })))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn discover_prints_site_summary() {
    let server = wordpress_site().await;

    wpdisco_cmd()
        .args(["discover", &format!("{}/", server.uri())])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Site"))
        .stdout(predicate::str::contains(format!("{}/wp-json/", server.uri())))
        .stdout(predicate::str::contains("oembed/1.0, wp/v2"))
        .stdout(predicate::str::contains("application-passwords"));
}

#[tokio::test]
async fn discover_json_output() -> Result<()> {
    let server = wordpress_site().await;

    let output = wpdisco_cmd()
        .args(["discover", &format!("{}/", server.uri()), "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Value = serde_json::from_slice(&output)?;
    assert_eq!(parsed["index_url"], format!("{}/wp-json/", server.uri()));
    assert_eq!(parsed["index"]["name"], "Test Site");
    Ok(())
}

#[tokio::test]
async fn root_prints_api_root() {
    let server = wordpress_site().await;

    wpdisco_cmd()
        .args(["root", &format!("{}/", server.uri())])
        .assert()
        .success()
        .stdout(format!("{}/wp-json/\n", server.uri()));
}

#[tokio::test]
async fn index_fetches_known_root() {
    let server = wordpress_site().await;

    wpdisco_cmd()
        .args(["index", &format!("{}/wp-json/", server.uri())])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Site"));
}

#[tokio::test]
async fn non_wordpress_site_exits_with_two() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    wpdisco_cmd()
        .args(["discover", &format!("{}/", server.uri())])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("This site is not a WordPress site."));

    wpdisco_cmd()
        .args(["root", &format!("{}/", server.uri()), "-f", "json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"root\": null"));
}

#[tokio::test]
async fn legacy_flag_accepts_legacy_relation() {
    let server = MockServer::start().await;
    let root = format!("{}/wp-json/", server.uri());
    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).insert_header(
                "Link",
                link(&root, "https://github.com/WP-API/WP-API").as_str(),
            ),
        )
        .mount(&server)
        .await;

    let site = format!("{}/", server.uri());
    wpdisco_cmd().args(["root", &site]).assert().code(2);
    wpdisco_cmd()
        .args(["root", &site, "--legacy"])
        .assert()
        .success()
        .stdout(format!("{root}\n"));
}

#[tokio::test]
async fn server_error_exits_with_one() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    wpdisco_cmd()
        .args(["discover", &format!("{}/", server.uri())])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Server returned error code 500"));
}

#[test]
fn invalid_uri_exits_with_one() {
    wpdisco_cmd()
        .args(["discover", "not-a-url"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid URL"));
}
