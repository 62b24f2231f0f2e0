//! Bundle and section definitions for `assetpress.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A named, ordered set of source files plus an output filename template.
///
/// ```toml
/// [css.screen]
/// source_filenames = ["css/reset.css", "css/screen.css"]
/// output_filename = "css/screen.r?.css"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetBundle {
    /// Source files, relative to `media_root`, concatenated in this order.
    pub source_filenames: Vec<PathBuf>,

    /// Output filename template containing the version placeholder.
    pub output_filename: String,

    /// Per-bundle filter override; falls back to the global `[filters]` list.
    pub filters: Option<Vec<String>>,
}

/// `[version]` — filename versioning settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// Substitute computed version tokens (disable to always use `default`).
    pub enable: bool,

    /// Registry key of the versioning strategy (`mtime` or `hash` built in).
    pub strategy: String,

    /// Placeholder token in output filename templates.
    pub placeholder: String,

    /// Token used when versioning is disabled or no version is available.
    pub default: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            enable: true,
            strategy: "mtime".into(),
            placeholder: "?".into(),
            default: "0".into(),
        }
    }
}

/// `[filters]` — global filter name lists per asset kind, applied in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FiltersConfig {
    pub css: Vec<String>,
    pub js: Vec<String>,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            css: vec!["minify-css".into()],
            js: vec!["minify-js".into()],
        }
    }
}

/// `[post_process]` — viewer version token substitution.
///
/// Each tag maps a literal token in the output text to a versioned-filename
/// template; the version of the matching file in `scan_dir` is substituted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostProcessConfig {
    pub enable: bool,

    /// Directory scanned for versioned viewer files, relative to `media_root`.
    pub scan_dir: PathBuf,

    /// Token/file pairs substituted into the output.
    pub tags: Vec<PostProcessTag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostProcessTag {
    /// Literal token replaced in the output text.
    pub token: String,

    /// Versioned filename template whose on-disk version is substituted.
    pub file: String,
}

impl Default for PostProcessConfig {
    fn default() -> Self {
        Self {
            enable: false,
            scan_dir: PathBuf::from("static/js"),
            tags: vec![
                PostProcessTag {
                    token: "{{ webgljsfileversion }}".into(),
                    file: "webglviewer.r?.js".into(),
                },
                PostProcessTag {
                    token: "{{ htmljsfileversion }}".into(),
                    file: "htmlviewer.r?.js".into(),
                },
                PostProcessTag {
                    token: "{{ flashjsfileversion }}".into(),
                    file: "flashviewer.r?.js".into(),
                },
            ],
        }
    }
}
