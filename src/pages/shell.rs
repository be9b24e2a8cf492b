//! Page shell rendering for documentation pages

use anyhow::{Context, Result};
use maud::{Markup, html};

use crate::assets::AssetManifest;
use crate::components::body::{mount_point, scripts};
use crate::components::head::{document_meta, links, social_meta};
use crate::components::layout::document;
use crate::content::{ContentLoader, EmptyOutlet, TitleSource};
use crate::site::SiteMeta;
use crate::url::{canonical_url, is_print_page, route_subpath};

/// Per-page inputs supplied by the generator host.
///
/// `content` is opaque to the renderer and only handed to the title source.
#[derive(Debug)]
pub struct PageContext<'a, C: ?Sized> {
    pub path: &'a str,
    pub content: &'a C,
    pub assets: &'a AssetManifest,
}

impl<C: ?Sized> Clone for PageContext<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for PageContext<'_, C> {}

impl<'a, C: ?Sized> PageContext<'a, C> {
    pub fn new(path: &'a str, content: &'a C, assets: &'a AssetManifest) -> Self {
        Self {
            path,
            content,
            assets,
        }
    }
}

/// Renders static HTML shells for documentation pages.
///
/// Holds the site constants and the two host capabilities: a title source
/// for deriving `<title>` from page content and a content loader for the
/// router outlet. Rendering takes `&self` and touches no shared mutable
/// state, so one renderer can serve many threads.
pub struct ShellRenderer<'s, T, L = EmptyOutlet> {
    site: SiteMeta<'s>,
    titles: T,
    loader: L,
}

impl<T> ShellRenderer<'static, T, EmptyOutlet> {
    /// Creates renderer with the default site constants and no outlet
    /// prerendering.
    pub fn new(titles: T) -> Self {
        Self {
            site: SiteMeta::WEBPACK,
            titles,
            loader: EmptyOutlet,
        }
    }
}

impl<'s, T, L> ShellRenderer<'s, T, L> {
    /// Replaces site constants.
    pub fn with_site<'n>(self, site: SiteMeta<'n>) -> ShellRenderer<'n, T, L> {
        ShellRenderer {
            site,
            titles: self.titles,
            loader: self.loader,
        }
    }

    /// Replaces the router outlet loader.
    pub fn with_loader<N>(self, loader: N) -> ShellRenderer<'s, T, N> {
        ShellRenderer {
            site: self.site,
            titles: self.titles,
            loader,
        }
    }

    pub fn site(&self) -> &SiteMeta<'s> {
        &self.site
    }

    /// Builds page shell markup.
    ///
    /// # Arguments
    ///
    /// * `page`: Path, content, and asset manifest of the page
    ///
    /// # Returns
    ///
    /// Complete document markup including the doctype
    ///
    /// # Errors
    ///
    /// Returns error if the title source fails for this page.
    pub fn generate<C>(&self, page: &PageContext<'_, C>) -> Result<Markup>
    where
        C: ?Sized,
        T: TitleSource<C>,
        L: ContentLoader,
    {
        let title = self
            .titles
            .title(page.content, page.path)
            .with_context(|| format!("Failed to derive title for {}", page.path))?;

        let print = is_print_page(page.path);
        let canonical = canonical_url(self.site.origin, page.path);
        let outlet = self.loader.load(route_subpath(page.path));

        let head = html! {
            (document_meta(&self.site, &title, print))
            (social_meta(&self.site, &title))
            (links(&self.site, page.assets, &canonical))
        };

        let body = html! {
            (mount_point(outlet))
            (scripts(&self.site, print))
        };

        Ok(document(head, body))
    }

    /// Renders page shell to an HTML string starting with `<!DOCTYPE html>`.
    ///
    /// Output depends only on the page inputs, the site constants, and the
    /// capabilities, so identical inputs yield byte-identical documents.
    ///
    /// # Errors
    ///
    /// Returns error if the title source fails; no partial document is
    /// produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use docshell::{AssetManifest, PageContext, ShellRenderer};
    ///
    /// let titles = |_: &str, _: &str| -> anyhow::Result<String> { Ok("Guides".to_string()) };
    /// let assets = AssetManifest::from_names(["index.css", "index.bundle.js"]);
    /// let renderer = ShellRenderer::new(titles);
    ///
    /// let html = renderer.render(&PageContext::new("/guides/", "", &assets))?;
    /// assert!(html.starts_with("<!DOCTYPE html>"));
    /// assert!(html.contains("<title>Guides</title>"));
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn render<C>(&self, page: &PageContext<'_, C>) -> Result<String>
    where
        C: ?Sized,
        T: TitleSource<C>,
        L: ContentLoader,
    {
        let markup = self
            .generate(page)
            .with_context(|| format!("Failed to render page {}", page.path))?;
        Ok(markup.into_string())
    }
}
