//! Configuration management for `assetpress.toml`.
//!
//! # Sections
//!
//! | Section          | Purpose                                         |
//! |------------------|-------------------------------------------------|
//! | top level        | `media_root`, `media_url`                       |
//! | `[version]`      | strategy, placeholder, default token            |
//! | `[filters]`      | global CSS/JS filter name lists                 |
//! | `[css.<name>]`   | CSS bundles                                     |
//! | `[js.<name>]`    | JS bundles                                      |
//! | `[post_process]` | viewer version token substitution               |

mod bundle;
mod error;

pub use bundle::{AssetBundle, FiltersConfig, PostProcessConfig, PostProcessTag, VersionConfig};
pub use error::{ConfigDiagnostics, ConfigError};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::asset::AssetKind;
use crate::log;

/// Characters escaped in media URLs (safe set: unreserved plus `/`).
const URL_QUOTE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Root configuration structure representing assetpress.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PressConfig {
    /// Project root - parent of the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Directory all source and output paths are relative to
    pub media_root: PathBuf,

    /// URL prefix under which media files are served
    pub media_url: String,

    /// Filename versioning settings
    pub version: VersionConfig,

    /// Global filter lists per asset kind
    pub filters: FiltersConfig,

    /// CSS bundles by name
    pub css: BTreeMap<String, AssetBundle>,

    /// JS bundles by name
    pub js: BTreeMap<String, AssetBundle>,

    /// Viewer-token post-processing
    pub post_process: PostProcessConfig,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            media_root: PathBuf::from("media"),
            media_url: "/media/".into(),
            version: VersionConfig::default(),
            filters: FiltersConfig::default(),
            css: BTreeMap::new(),
            js: BTreeMap::new(),
            post_process: PostProcessConfig::default(),
        }
    }
}

impl PressConfig {
    /// Load configuration from `path`, warning about unknown fields.
    ///
    /// `media_root` is resolved against the config file's parent directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let mut config = Self::parse_with_warnings(&content, path)?;

        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.finalize(&root);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string (no normalization or validation)
    pub fn from_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Parse with unknown field detection via serde_ignored.
    fn parse_with_warnings(content: &str, path: &Path) -> Result<Self> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config: Self = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;

        if !ignored.is_empty() {
            log!(
                "config";
                "unknown fields in {}: {}",
                path.display(),
                ignored.join(", ")
            );
        }
        Ok(config)
    }

    /// Resolve media_root against the project root.
    fn finalize(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        if self.media_root.is_relative() {
            self.media_root = root.join(&self.media_root);
        }
    }

    /// Validate, collecting all diagnostics before failing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        if self.version.placeholder.is_empty() {
            diag.error("version.placeholder", "must not be empty");
        }

        for (section, bundles) in [("css", &self.css), ("js", &self.js)] {
            for (name, bundle) in bundles {
                let field = format!("{section}.{name}");
                if bundle.source_filenames.is_empty() {
                    diag.error(&field, "source_filenames must not be empty");
                }
                if bundle.output_filename.is_empty() {
                    diag.error(&field, "output_filename must not be empty");
                } else if self.version.enable
                    && !self.version.placeholder.is_empty()
                    && !bundle.output_filename.contains(&self.version.placeholder)
                {
                    diag.error(
                        &field,
                        format!(
                            "output_filename has no `{}` placeholder",
                            self.version.placeholder
                        ),
                    );
                }
            }
        }

        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Full path to a media-relative `filename`.
    pub fn media_path(&self, filename: &str) -> PathBuf {
        self.media_root.join(filename)
    }

    /// Public URL for a media-relative `filename`.
    pub fn media_url_for(&self, filename: &str) -> String {
        format!(
            "{}{}",
            self.media_url,
            utf8_percent_encode(filename, URL_QUOTE)
        )
    }

    /// All bundles with their kind: CSS first, then JS, each sorted by name.
    pub fn bundles(&self) -> impl Iterator<Item = (AssetKind, &String, &AssetBundle)> {
        self.css
            .iter()
            .map(|(name, bundle)| (AssetKind::Css, name, bundle))
            .chain(
                self.js
                    .iter()
                    .map(|(name, bundle)| (AssetKind::Js, name, bundle)),
            )
    }

    /// Filter names for `bundle`: its own list, else the global list for `kind`.
    pub fn filter_names<'a>(&'a self, kind: AssetKind, bundle: &'a AssetBundle) -> &'a [String] {
        if let Some(filters) = &bundle.filters {
            return filters;
        }
        match kind {
            AssetKind::Css => &self.filters.css,
            AssetKind::Js => &self.filters.js,
        }
    }
}
