//! Template post-processing: fixed-format version token substitution.
//!
//! The deployment this tool grew out of embeds the current version of three
//! viewer scripts into the compressed output. That substitution is bespoke,
//! so it lives behind its own trait instead of the generic filter pipeline.

use std::path::{Path, PathBuf};

use crate::asset::version::version_from_file;
use crate::config::{PostProcessConfig, VersionConfig};
use crate::debug;
use crate::error::PressError;

/// Post-pass over filtered output text.
pub trait PostProcess {
    fn apply(&self, text: String) -> Result<String, PressError>;
}

/// Substitutes token -> version pairs by scanning a directory for files
/// matching each tag's versioned-name template.
///
/// A token whose template matches no file is left in place.
pub struct ViewerVersionTags {
    scan_dir: PathBuf,
    tags: Vec<(String, String)>,
    version: VersionConfig,
}

impl ViewerVersionTags {
    pub fn from_config(
        cfg: &PostProcessConfig,
        media_root: &Path,
        version: &VersionConfig,
    ) -> Self {
        Self {
            scan_dir: media_root.join(&cfg.scan_dir),
            tags: cfg
                .tags
                .iter()
                .map(|tag| (tag.token.clone(), tag.file.clone()))
                .collect(),
            version: version.clone(),
        }
    }
}

impl PostProcess for ViewerVersionTags {
    fn apply(&self, mut text: String) -> Result<String, PressError> {
        for (token, template) in &self.tags {
            match version_from_file(&self.scan_dir, template, &self.version)? {
                Some(version) => text = text.replace(token.as_str(), &version),
                None => {
                    debug!("post"; "no versioned file for {template}, leaving {token} in place");
                }
            }
        }
        Ok(text)
    }
}
