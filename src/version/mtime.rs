//! Mtime-based versioning: token = newest source mtime in whole seconds.

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::error::PressError;

use super::{StrategyContext, VersioningStrategy, version_changed};

pub struct MtimeVersioning {
    ctx: StrategyContext,
}

impl MtimeVersioning {
    pub fn new(ctx: StrategyContext) -> Self {
        Self { ctx }
    }
}

/// Modification time of `path` in seconds since the epoch.
fn mtime_secs(path: &Path) -> Result<u64, PressError> {
    let modified = path
        .metadata()
        .and_then(|meta| meta.modified())
        .map_err(|source| PressError::Source {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(modified
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs())
}

impl VersioningStrategy for MtimeVersioning {
    fn get_version(&self, sources: &[PathBuf]) -> Result<String, PressError> {
        let mut max = 0u64;
        for source in sources {
            max = max.max(mtime_secs(&self.ctx.media_root.join(source))?);
        }
        Ok(max.to_string())
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
