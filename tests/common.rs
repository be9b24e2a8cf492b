//! Shared test utilities for integration tests.
//!
//! Provides helpers for laying out a content tree, compiled assets, and
//! prerendered fragments in a temporary site directory.

#![allow(dead_code)]

use anyhow::Result;
use docshell::Config;
use std::path::Path;
use tempfile::TempDir;

/// Content tree used across tests: root, a guides section with one child,
/// and a printable copy of the guides section.
pub const CONTENT_TREE: &str = r#"{
    "url": "/",
    "title": "webpack",
    "children": [
        {
            "url": "/guides/",
            "title": "Guides",
            "children": [
                { "url": "/guides/getting-started/", "title": "Getting Started" }
            ]
        },
        { "url": "/printable/guides/", "title": "Guides" }
    ]
}"#;

/// Creates temporary site directory with content tree and compiled assets.
///
/// Layout:
/// - `_content.json`
/// - `build/` holding `index.css`, `vendor.bundle.js`, `index.bundle.js`
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_test_site() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let path = dir.path();

    write_file(path, "_content.json", CONTENT_TREE)?;
    write_file(path, "build/index.css", "body{}")?;
    write_file(path, "build/vendor.bundle.js", "")?;
    write_file(path, "build/index.bundle.js", "")?;

    Ok(dir)
}

/// Builds configuration pointing at a site created by [`create_test_site`].
pub fn site_config(site: &Path) -> Config {
    Config {
        content: site.join("_content.json"),
        assets: site.join("build"),
        stats: None,
        output: site.join("out"),
        fragments: None,
        origin: None,
        open: false,
    }
}

/// Writes file under `root`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
