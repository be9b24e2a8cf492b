//! Fixed site metadata shared by every rendered page.

/// Site-wide constants that appear in every page shell.
///
/// Values are immutable for the life of the process. The only supported
/// adjustment is swapping the canonical origin for preview builds, see
/// [`SiteMeta::with_origin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteMeta<'a> {
    pub origin: &'a str,
    pub site_name: &'a str,
    pub description: &'a str,
    pub theme_color: &'a str,
    pub logo: &'a str,
    pub favicon: &'a str,
    pub social_handle: &'a str,
    pub social_domain: &'a str,
    pub manifest: &'a str,
    pub icon_192: &'a str,
    pub icon_152: &'a str,
    /// Script bundles in load order
    pub bundles: &'a [&'a str],
    pub print_style: &'a str,
    pub print_script: &'a str,
}

/// Bundles emitted by the client build, vendor first.
pub const BUNDLES: &[&str] = &["/vendor.bundle.js", "/index.bundle.js"];

const DESCRIPTION: &str = "webpack is a module bundler. Its main purpose is to bundle JavaScript files for usage in a browser, yet it is also capable of transforming, bundling, or packaging just about any resource or asset.";

const PRINT_STYLE: &str = "body { margin: 0; }";

const PRINT_SCRIPT: &str = "window.addEventListener('load', function () { window.print(); });";

impl SiteMeta<'static> {
    /// Metadata for webpack.js.org
    pub const WEBPACK: SiteMeta<'static> = SiteMeta {
        origin: "https://webpack.js.org",
        site_name: "webpack",
        description: DESCRIPTION,
        theme_color: "#2B3A42",
        logo: "/assets/logo-on-white-bg.svg",
        favicon: "/favicon.ico",
        social_handle: "@webpack",
        social_domain: "https://webpack.js.org/",
        manifest: "/manifest.json",
        icon_192: "/images/icons/icon-192x192.png",
        icon_152: "/images/icons/icon-152x152.png",
        bundles: BUNDLES,
        print_style: PRINT_STYLE,
        print_script: PRINT_SCRIPT,
    };
}

impl<'a> SiteMeta<'a> {
    /// Returns a copy with a different canonical origin.
    ///
    /// A trailing slash on `origin` is dropped so canonical URLs never
    /// contain a double slash after the host.
    pub fn with_origin(self, origin: &'a str) -> SiteMeta<'a> {
        SiteMeta {
            origin: origin.strip_suffix('/').unwrap_or(origin),
            ..self
        }
    }
}

impl Default for SiteMeta<'static> {
    fn default() -> Self {
        Self::WEBPACK
    }
}
