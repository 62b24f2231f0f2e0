//! Ordered source concatenation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PressError;

/// Concatenate `filenames` (relative to `media_root`) in list order,
/// appending `separator` after each file.
///
/// Aborts on the first unreadable source; no partial result is produced.
pub fn concat(
    media_root: &Path,
    filenames: &[PathBuf],
    separator: &[u8],
) -> Result<Vec<u8>, PressError> {
    let mut out = Vec::new();
    for filename in filenames {
        let path = media_root.join(filename);
        let bytes = fs::read(&path).map_err(|source| PressError::Source {
            path: path.clone(),
            source,
        })?;
        out.extend_from_slice(&bytes);
        out.extend_from_slice(separator);
    }
    Ok(out)
}
