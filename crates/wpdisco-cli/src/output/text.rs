//! Text output formatting

use colored::Colorize;
use std::fmt::Write;
use wpdisco_core::{LinkAttributes, Site};

const LABEL_WIDTH: usize = 16;

fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{} {value}", format!("{label:<LABEL_WIDTH$}").bold());
}

fn joined_or_none(items: &[&str]) -> String {
    if items.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        items.join(", ")
    }
}

pub fn render_site(site: &Site) -> String {
    let mut out = String::new();

    field(&mut out, "API root:", &site.index_url().green().to_string());
    if let Some(name) = site.name() {
        field(&mut out, "Name:", name);
    }
    if let Some(description) = site.description().filter(|d| !d.is_empty()) {
        field(&mut out, "Description:", description);
    }
    if let Some(url) = site.url() {
        field(&mut out, "URL:", url);
    }
    if let Some(home) = site.home().filter(|home| Some(*home) != site.url()) {
        field(&mut out, "Home:", home);
    }
    field(&mut out, "Namespaces:", &joined_or_none(&site.namespaces()));

    let auth: Vec<&str> = site
        .authentication()
        .map(|methods| methods.keys().map(String::as_str).collect())
        .unwrap_or_default();
    field(&mut out, "Authentication:", &joined_or_none(&auth));
    field(&mut out, "Routes:", &site.routes().count().to_string());

    out
}

pub fn render_links(links: &[LinkAttributes]) -> String {
    let mut out = String::new();

    for (i, link) in links.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        field(&mut out, "href:", link.href());
        for (key, value) in link.iter().filter(|(key, _)| *key != wpdisco_core::link::HREF) {
            field(&mut out, &format!("{key}:"), value);
        }
    }

    out
}
