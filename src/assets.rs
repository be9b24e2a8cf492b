//! Compiled asset manifest

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::{fs, path::Path};

/// Ordered list of asset file names produced by the last bundling pass.
///
/// Order is whatever the source supplied and is preserved into the
/// stylesheet links of every rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    names: Vec<String>,
}

impl AssetManifest {
    /// Creates manifest from asset names, keeping their order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads asset names from bundler stats JSON.
    ///
    /// Accepts the `assets` field either as an array of objects carrying a
    /// `name` field or as an object keyed by asset name.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON, or has
    /// no usable `assets` field.
    pub fn from_stats_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stats file {}", path.display()))?;
        Self::from_stats_json(&raw)
            .with_context(|| format!("Invalid stats file {}", path.display()))
    }

    /// Parses asset names from bundler stats JSON text.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not JSON or lacks an `assets` field.
    pub fn from_stats_json(raw: &str) -> Result<Self> {
        let stats: Value = serde_json::from_str(raw).context("Stats are not valid JSON")?;

        match stats.get("assets") {
            Some(Value::Array(entries)) => {
                let mut names = Vec::with_capacity(entries.len());
                for entry in entries {
                    let name = entry
                        .get("name")
                        .and_then(Value::as_str)
                        .context("Asset entry has no name")?;
                    names.push(name.to_string());
                }
                Ok(Self { names })
            }
            Some(Value::Object(map)) => Ok(Self::from_names(map.keys().cloned())),
            Some(_) => bail!("Stats field `assets` must be an array or an object"),
            None => bail!("Stats have no `assets` field"),
        }
    }

    /// Scans a build output directory for asset names.
    ///
    /// Only regular files directly inside `dir` are listed. Names are sorted
    /// so repeated builds yield the same order.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be read or a file name is not
    /// valid UTF8.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read asset directory {}", dir.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry
                .file_name()
                .into_string()
                .map_err(|n| anyhow::anyhow!("Asset name is not valid UTF8: {:?}", n))?;
            names.push(name);
        }
        names.sort();

        Ok(Self { names })
    }

    /// Returns all asset names in manifest order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns asset names ending in `.css`, in manifest order.
    pub fn stylesheets(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| name.ends_with(".css"))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
