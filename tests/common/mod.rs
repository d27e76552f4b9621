//! Common test utilities for integration tests
//!
//! Provides shared fixtures, helpers, and test utilities used across
//! multiple integration test files.

#![allow(dead_code)]

use std::future::Future;
use std::path::PathBuf;

use tempfile::TempDir;
use wiki_publisher::Config;

pub const TEST_TOKEN: &str = "ghp_testtoken0123456789abcdefghij";

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Create a wiki directory holding the given `(filename, content)` pairs
pub fn wiki_dir(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let wiki = dir.path().join("wiki");
    std::fs::create_dir(&wiki).expect("Failed to create wiki dir");
    for (name, content) in files {
        std::fs::write(wiki.join(name), content).expect("Failed to write wiki page");
    }
    (dir, wiki)
}

/// Config pointing at a mock API server and a test wiki directory
pub fn test_config(api_url: &str, wiki_dir: PathBuf) -> Config {
    Config {
        repository: "octo/handbook".to_string(),
        wiki_dir,
        api_url: api_url.to_string(),
        timeout_secs: 5,
        ..Default::default()
    }
}

/// Run an async test body with `GITHUB_TOKEN` set (or unset) for its duration
///
/// The environment is process-global, so the runtime is created inside
/// temp-env's lock rather than by `#[tokio::test]`.
pub fn with_token<F, R>(token: Option<&str>, test: F) -> R
where
    F: Future<Output = R>,
{
    temp_env::with_var("GITHUB_TOKEN", token, || {
        tokio::runtime::Runtime::new()
            .expect("Failed to build runtime")
            .block_on(test)
    })
}

/// JSON body for `GET /repos/octo/handbook`
pub fn repository_body() -> String {
    serde_json::json!({
        "id": 42,
        "name": "handbook",
        "full_name": "octo/handbook",
        "html_url": "https://github.com/octo/handbook",
        "has_issues": true,
        "has_wiki": true
    })
    .to_string()
}

/// JSON body for a created issue
pub fn issue_body(number: u64) -> String {
    serde_json::json!({
        "id": 1000 + number,
        "number": number,
        "title": "Wiki Page",
        "html_url": format!("https://github.com/octo/handbook/issues/{number}"),
        "state": "open"
    })
    .to_string()
}
