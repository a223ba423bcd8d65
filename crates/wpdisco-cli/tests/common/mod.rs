#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

#[allow(dead_code)]
pub const API_ROOT_REL: &str = "https://api.w.org/";

fn config_dir() -> &'static Path {
    static CONFIG_DIR: OnceLock<TempDir> = OnceLock::new();
    CONFIG_DIR
        .get_or_init(|| {
            let dir = tempfile::tempdir().expect("failed to create config dir for tests");
            std::fs::write(dir.path().join("config.toml"), "[http]\ntimeout_secs = 5\n")
                .expect("failed to write test config");
            dir
        })
        .path()
}

/// Create a `wpdisco` command isolated from the user's config and environment.
pub fn wpdisco_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wpdisco"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("WPDISCO_CONFIG", config_dir().join("config.toml"));
    cmd.env_remove("WPDISCO_TIMEOUT_SECS");
    cmd.env_remove("WPDISCO_USER_AGENT");
    cmd.env_remove("WPDISCO_LEGACY");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[allow(dead_code)]
pub fn link(href: &str, rel: &str) -> String {
    format!("<{href}>; rel=\"{rel}\"")
}
