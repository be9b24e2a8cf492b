//! Content tree and page title derivation.
//!
//! The content tree is produced by the site's content build and describes
//! every documentation page as a nested node with a URL and a title. This
//! module only reads it; parsing source documents into the tree happens
//! elsewhere.

use anyhow::{Context, Result};
use maud::Markup;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Title used when a page is missing from the tree or has no title.
pub const FALLBACK_TITLE: &str = "webpack";

/// Derives the page title from opaque page content.
///
/// Implemented by [`TreeTitles`] and by any closure of shape
/// `Fn(&C, &str) -> Result<String>`, so a host can plug in its own lookup.
pub trait TitleSource<C: ?Sized> {
    /// Returns the title for the page at `path`.
    ///
    /// # Errors
    ///
    /// Implementation defined. Errors abort the page render.
    fn title(&self, content: &C, path: &str) -> Result<String>;
}

impl<C: ?Sized, F> TitleSource<C> for F
where
    F: Fn(&C, &str) -> Result<String>,
{
    fn title(&self, content: &C, path: &str) -> Result<String> {
        self(content, path)
    }
}

/// Node of the documentation content tree.
///
/// Unknown fields in the JSON (sizes, anchors, groups) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContentTree {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub children: Vec<ContentTree>,
}

impl ContentTree {
    /// Loads content tree from JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a valid tree.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content tree {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid content tree {}", path.display()))
    }

    /// Parses content tree from JSON text.
    ///
    /// # Errors
    ///
    /// Returns error if the text does not describe a tree node.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse content tree JSON")
    }

    /// Finds the first node whose URL equals `url`, depth first.
    pub fn find(&self, url: &str) -> Option<&ContentTree> {
        if self.url.as_deref() == Some(url) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(url))
    }

    /// Returns every node URL in pre-order, first occurrence only.
    pub fn urls(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut urls = Vec::new();
        self.collect_urls(&mut seen, &mut urls);
        urls
    }

    fn collect_urls<'a>(&'a self, seen: &mut HashSet<&'a str>, urls: &mut Vec<&'a str>) {
        if let Some(url) = self.url.as_deref()
            && seen.insert(url)
        {
            urls.push(url);
        }
        for child in &self.children {
            child.collect_urls(seen, urls);
        }
    }
}

/// Builds the document title for a page in the content tree.
///
/// Root page uses its own title bare; every other page gets the site name
/// appended after a pipe. Missing or untitled pages fall back to the site
/// name.
///
/// # Arguments
///
/// * `tree`: Root of the content tree
/// * `path`: Site relative URL path of the page
///
/// # Returns
///
/// Title text for the `<title>` element
pub fn page_title(tree: &ContentTree, path: &str) -> String {
    let Some(page) = tree.find(path) else {
        return FALLBACK_TITLE.to_string();
    };

    match (page.url.as_deref(), page.title.as_deref()) {
        (_, None | Some("")) => FALLBACK_TITLE.to_string(),
        (Some("/"), Some(title)) => title.to_string(),
        (_, Some(title)) => format!("{} | {}", title, FALLBACK_TITLE),
    }
}

/// Title lookup against the tree passed as page content.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeTitles;

impl TitleSource<ContentTree> for TreeTitles {
    fn title(&self, content: &ContentTree, path: &str) -> Result<String> {
        Ok(page_title(content, path))
    }
}

/// Supplies markup for the router outlet inside the mount element.
///
/// Keyed on the route sub-path, i.e. the page path relative to `/`.
/// Returning `None` leaves the mount element empty for the client bundle.
pub trait ContentLoader {
    fn load(&self, subpath: &str) -> Option<Markup>;
}

impl<F> ContentLoader for F
where
    F: Fn(&str) -> Option<Markup>,
{
    fn load(&self, subpath: &str) -> Option<Markup> {
        self(subpath)
    }
}

/// Loader that never prerenders; the client bundle fills the outlet.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyOutlet;

impl ContentLoader for EmptyOutlet {
    fn load(&self, _subpath: &str) -> Option<Markup> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> ContentTree {
        ContentTree::from_json(
            r#"{
                "url": "/",
                "title": "webpack",
                "type": "directory",
                "children": [
                    {
                        "url": "/guides/",
                        "title": "Guides",
                        "children": [
                            { "url": "/guides/getting-started/", "title": "Getting Started", "size": 1200 }
                        ]
                    },
                    { "url": "/untitled/" },
                    { "url": "/guides/", "title": "Duplicate" }
                ]
            }"#,
        )
        .expect("Should parse sample tree")
    }

    #[test]
    fn test_find_nested() {
        // Arrange
        let tree = sample_tree();

        // Act
        let node = tree.find("/guides/getting-started/");

        // Assert
        assert_eq!(
            node.and_then(|n| n.title.as_deref()),
            Some("Getting Started")
        );
    }

    #[test]
    fn test_find_first_match_wins() {
        let tree = sample_tree();
        let node = tree.find("/guides/").expect("Should find guides");
        assert_eq!(node.title.as_deref(), Some("Guides"));
    }

    #[test]
    fn test_find_missing() {
        assert!(sample_tree().find("/nope/").is_none());
    }

    #[test]
    fn test_urls_preorder_deduplicated() {
        let tree = sample_tree();
        assert_eq!(
            tree.urls(),
            vec!["/", "/guides/", "/guides/getting-started/", "/untitled/"]
        );
    }

    #[test]
    fn test_page_title_root() {
        assert_eq!(page_title(&sample_tree(), "/"), "webpack");
    }

    #[test]
    fn test_page_title_nested_has_suffix() {
        assert_eq!(
            page_title(&sample_tree(), "/guides/getting-started/"),
            "Getting Started | webpack"
        );
    }

    #[test]
    fn test_page_title_missing_page_falls_back() {
        assert_eq!(page_title(&sample_tree(), "/missing/"), FALLBACK_TITLE);
    }

    #[test]
    fn test_page_title_untitled_falls_back() {
        assert_eq!(page_title(&sample_tree(), "/untitled/"), FALLBACK_TITLE);
    }

    #[test]
    fn test_page_title_untitled_root() {
        let tree = ContentTree {
            url: Some("/".to_string()),
            title: None,
            children: vec![],
        };
        assert_eq!(page_title(&tree, "/"), FALLBACK_TITLE);
    }

    #[test]
    fn test_closure_title_source() {
        // Arrange
        let source = |content: &str, path: &str| -> Result<String> {
            Ok(format!("{}:{}", content, path))
        };

        // Act
        let title = source.title("doc", "/a/").expect("Closure should succeed");

        // Assert
        assert_eq!(title, "doc:/a/");
    }

    #[test]
    fn test_tree_title_source() {
        let tree = sample_tree();
        let title = TreeTitles
            .title(&tree, "/guides/")
            .expect("Tree lookup is infallible");
        assert_eq!(title, "Guides | webpack");
    }

    #[test]
    fn test_empty_outlet_loads_nothing() {
        assert!(EmptyOutlet.load("guides/").is_none());
    }

    #[test]
    fn test_closure_loader_keyed_on_subpath() {
        // Arrange
        let loader = |subpath: &str| -> Option<Markup> {
            (subpath == "guides/").then(|| maud::html! { p { "Guides" } })
        };

        // Act
        let hit = loader.load("guides/");
        let miss = loader.load("api/");

        // Assert
        assert_eq!(
            hit.map(|m| m.into_string()),
            Some("<p>Guides</p>".to_string())
        );
        assert!(miss.is_none());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(ContentTree::from_json("[1, 2]").is_err());
    }
}
