//! Site generation: walks the content tree and writes one shell per page.

use anyhow::{Context, Result, bail};
use maud::{Markup, PreEscaped};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::assets::AssetManifest;
use crate::config::Config;
use crate::content::{ContentLoader, ContentTree, TitleSource, TreeTitles};
use crate::pages::shell::{PageContext, ShellRenderer};
use crate::site::SiteMeta;
use crate::url::is_print_page;

/// Counts of pages written by [`generate_site`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub pages: usize,
    pub printable: usize,
}

/// Content loader reading prerendered body fragments from disk.
///
/// The fragment for sub-path `guides/` lives at `<root>/guides/index.html`;
/// the root page uses `<root>/index.html`.
#[derive(Debug, Clone)]
pub struct FragmentDir {
    root: PathBuf,
}

impl FragmentDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the fragment file path for a route sub-path.
    ///
    /// Only non-empty segments are joined, so the result always stays
    /// under the fragment root.
    pub fn fragment_path(&self, subpath: &str) -> PathBuf {
        output_path_for(&self.root, subpath)
    }
}

impl ContentLoader for FragmentDir {
    fn load(&self, subpath: &str) -> Option<Markup> {
        if subpath.starts_with('/') || validate_page_path(&format!("/{}", subpath)).is_err() {
            warn!(subpath, "Skipping fragment outside fragment directory");
            return None;
        }

        let path = self.fragment_path(subpath);
        match fs::read_to_string(&path) {
            Ok(fragment) => Some(PreEscaped(fragment)),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read fragment");
                None
            }
        }
    }
}

/// Either no prerendering or fragments from a directory, as configured.
enum Outlet {
    Empty,
    Fragments(FragmentDir),
}

impl ContentLoader for Outlet {
    fn load(&self, subpath: &str) -> Option<Markup> {
        match self {
            Outlet::Empty => None,
            Outlet::Fragments(dir) => dir.load(subpath),
        }
    }
}

/// Validates page path before it is mapped onto the output tree.
///
/// # Errors
///
/// Returns error if path is not rooted at `/` or contains a `..` segment
/// that could escape the output directory.
pub fn validate_page_path(path: &str) -> Result<()> {
    if !path.starts_with('/') {
        bail!("Page path must start with '/': {}", path);
    }
    if path.split('/').any(|segment| segment == "..") {
        bail!("Page path contains directory traversal: {}", path);
    }
    Ok(())
}

/// Returns output file for a page: `<output>/<path>/index.html`.
pub fn output_path_for(output: &Path, path: &str) -> PathBuf {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .fold(output.to_path_buf(), |dir, segment| dir.join(segment))
        .join("index.html")
}

/// Renders one page and writes it under `output`.
///
/// # Errors
///
/// Returns error if the path is unsafe, rendering fails, or the file cannot
/// be written.
pub fn write_page<C, T, L>(
    renderer: &ShellRenderer<'_, T, L>,
    page: &PageContext<'_, C>,
    output: &Path,
) -> Result<PathBuf>
where
    C: ?Sized,
    T: TitleSource<C>,
    L: ContentLoader,
{
    validate_page_path(page.path)?;

    let html = renderer.render(page)?;
    let target = output_path_for(output, page.path);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&target, html)
        .with_context(|| format!("Failed to write page {}", target.display()))?;

    debug!(path = page.path, file = %target.display(), "Generated page");
    Ok(target)
}

/// Loads the asset manifest from the stats file, or scans the asset
/// directory when no stats file is configured.
///
/// # Errors
///
/// Returns error if the configured source cannot be read.
pub fn load_manifest(config: &Config) -> Result<AssetManifest> {
    match &config.stats {
        Some(stats) => AssetManifest::from_stats_file(stats),
        None => AssetManifest::from_dir(&config.assets),
    }
}

/// Generates a page shell for every URL in the content tree.
///
/// # Errors
///
/// Returns error if inputs cannot be loaded or any page fails; the failing
/// page path is included in the error chain.
pub fn generate_site(config: &Config) -> Result<GenerationSummary> {
    let tree = ContentTree::from_file(&config.content).context("Failed to load content tree")?;
    let assets = load_manifest(config).context("Failed to load asset manifest")?;

    info!(
        assets = assets.len(),
        stylesheets = assets.stylesheets().count(),
        "Loaded asset manifest"
    );

    let site = match &config.origin {
        Some(origin) => SiteMeta::WEBPACK.with_origin(origin),
        None => SiteMeta::WEBPACK,
    };

    let outlet = match &config.fragments {
        Some(dir) => Outlet::Fragments(FragmentDir::new(dir)),
        None => Outlet::Empty,
    };

    let renderer = ShellRenderer::new(TreeTitles)
        .with_site(site)
        .with_loader(outlet);

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let mut summary = GenerationSummary::default();
    for path in tree.urls() {
        let page = PageContext::new(path, &tree, &assets);
        write_page(&renderer, &page, &config.output)
            .with_context(|| format!("Failed to generate page {}", path))?;

        summary.pages += 1;
        if is_print_page(path) {
            summary.printable += 1;
        }
    }

    info!(
        pages = summary.pages,
        printable = summary.printable,
        output = %config.output.display(),
        "Generated page shells"
    );

    Ok(summary)
}
