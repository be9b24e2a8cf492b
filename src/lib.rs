//! Static HTML page shells for a documentation site.

mod assets;
pub mod components;
mod config;
mod content;
pub mod generators;
pub mod pages;
mod site;
mod url;

pub use assets::AssetManifest;
pub use config::Config;
pub use content::{
    ContentLoader, ContentTree, EmptyOutlet, FALLBACK_TITLE, TitleSource, TreeTitles, page_title,
};
pub use generators::{FragmentDir, GenerationSummary, generate_site};
pub use pages::shell::{PageContext, ShellRenderer};
pub use site::{BUNDLES, SiteMeta};
pub use url::{canonical_url, enforce_trailing_slash, is_print_page, route_subpath};
