//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for docshell.
#[derive(Debug, Clone, Parser)]
#[command(name = "docshell", version, about, long_about = None)]
pub struct Config {
    /// Content tree JSON listing every page
    #[arg(long, default_value = "_content.json")]
    pub content: PathBuf,

    /// Directory holding compiled assets (scanned when no stats file is given)
    #[arg(long, default_value = "dist")]
    pub assets: PathBuf,

    /// Bundler stats JSON with the compiled asset list
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Directory of prerendered body fragments for the mount element
    #[arg(long)]
    pub fragments: Option<PathBuf>,

    /// Canonical origin override (defaults to https://webpack.js.org)
    #[arg(long)]
    pub origin: Option<String>,

    /// Open generated index page in a browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content tree, the asset source, or the fragment
    /// directory does not exist, or if the origin is not an http(s) URL.
    pub fn validate(&self) -> Result<()> {
        if !self.content.exists() {
            bail!("Content tree does not exist: {}", self.content.display());
        }

        match &self.stats {
            Some(stats) if !stats.exists() => {
                bail!("Stats file does not exist: {}", stats.display());
            }
            None if !self.assets.is_dir() => {
                bail!("Asset directory does not exist: {}", self.assets.display());
            }
            _ => {}
        }

        if let Some(fragments) = &self.fragments
            && !fragments.is_dir()
        {
            bail!("Fragment directory does not exist: {}", fragments.display());
        }

        if let Some(origin) = &self.origin
            && !(origin.starts_with("http://") || origin.starts_with("https://"))
        {
            bail!("Origin must start with http:// or https://: {}", origin);
        }

        Ok(())
    }
}
