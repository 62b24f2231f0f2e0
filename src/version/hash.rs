//! Content-hash versioning: token = fingerprint of the concatenated sources.
//!
//! Unlike mtime tokens, hash tokens survive rebuilds that touch files without
//! changing them, so browsers only re-fetch when content actually changed.

use std::hash::Hasher;
use std::path::PathBuf;

use rustc_hash::FxHasher;

use crate::asset::concat;
use crate::error::PressError;

use super::{StrategyContext, VersioningStrategy, version_changed};

pub struct HashVersioning {
    ctx: StrategyContext,
}

impl HashVersioning {
    pub fn new(ctx: StrategyContext) -> Self {
        Self { ctx }
    }
}

/// 8-char hex fingerprint of `data`.
pub fn fingerprint(data: &[u8]) -> String {
    let mut hasher = FxHasher::default();
    hasher.write(data);
    format!("{:016x}", hasher.finish())[..8].to_string()
}

impl VersioningStrategy for HashVersioning {
    fn get_version(&self, sources: &[PathBuf]) -> Result<String, PressError> {
        let content = concat(&self.ctx.media_root, sources, b"")?;
        Ok(fingerprint(&content))
    }

    fn needs_update(
        &self,
        output_template: &str,
        _sources: &[PathBuf],
        version: &str,
    ) -> Result<bool, PressError> {
        version_changed(&self.ctx, output_template, version)
    }
}
