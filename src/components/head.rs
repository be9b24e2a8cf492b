//! Head metadata components

use maud::{Markup, html};

use crate::assets::AssetManifest;
use crate::site::SiteMeta;

/// Renders charset, theme, viewport, robots, title, and description tags.
///
/// Print pages get a `noindex,nofollow` robots tag so the printable copies
/// of documentation sections stay out of search results.
///
/// # Arguments
///
/// * `site`: Site constants
/// * `title`: Page title
/// * `print`: Whether the page is a print view
///
/// # Returns
///
/// Leading head markup
pub fn document_meta(site: &SiteMeta<'_>, title: &str, print: bool) -> Markup {
    html! {
        meta charset="utf-8";
        meta name="theme-color" content=(site.theme_color);
        meta name="viewport" content="width=device-width, initial-scale=1";
        @if print {
            meta name="robots" content="noindex,nofollow";
        }
        title { (title) }
        meta name="description" content=(site.description);
    }
}

/// Renders Open Graph and Twitter card tags.
pub fn social_meta(site: &SiteMeta<'_>, title: &str) -> Markup {
    html! {
        meta property="og:site_name" content=(site.site_name);
        meta property="og:type" content="website";
        meta property="og:title" content=(title);
        meta property="og:description" name="description" content=(site.description);
        meta property="og:image" content=(site.logo);
        meta property="twitter:card" content="summary";
        meta property="twitter:site" content=(site.social_handle);
        meta property="twitter:creator" content=(site.social_handle);
        meta property="twitter:domain" content=(site.social_domain);
    }
}

/// Renders favicon, stylesheet, manifest, canonical, and app icon links.
///
/// One stylesheet link is emitted per `.css` asset, in manifest order,
/// each rooted at `/`.
///
/// # Arguments
///
/// * `site`: Site constants
/// * `assets`: Compiled asset manifest
/// * `canonical`: Absolute canonical URL of the page
///
/// # Returns
///
/// Trailing head markup
pub fn links(site: &SiteMeta<'_>, assets: &AssetManifest, canonical: &str) -> Markup {
    html! {
        link rel="icon" type="image/x-icon" href=(site.favicon);
        @for stylesheet in assets.stylesheets() {
            link rel="stylesheet" href=(format!("/{}", stylesheet));
        }
        link rel="manifest" href=(site.manifest);
        link rel="canonical" href=(canonical);
        link rel="apple-touch-icon" href=(site.icon_192);
        link rel="apple-touch-icon" sizes="152x152" href=(site.icon_152);
        link rel="icon" sizes="192x192" href=(site.icon_192);
    }
}
