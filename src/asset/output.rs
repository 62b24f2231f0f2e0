//! Output persistence and stale output pruning.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::config::VersionConfig;
use crate::debug;
use crate::error::PressError;

use super::version::{basename, version_pattern};

/// Path of the gzip companion: the full filename with `.gz` appended.
pub fn gz_path(path: &Path) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_os_string();
    os.push(".gz");
    PathBuf::from(os)
}

/// Write `contents` to `path` plus a gzip copy to `path + ".gz"`.
///
/// Creates the parent directory if absent. Both writes truncate.
pub fn save_file(path: &Path, contents: &[u8]) -> Result<(), PressError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;

    let mut encoder = GzEncoder::new(File::create(gz_path(path))?, Compression::default());
    encoder.write_all(contents)?;
    encoder.finish()?;
    Ok(())
}

/// Remove previously generated outputs in `dir` matching `template`.
///
/// Matching is anchored on the template's basename. The `.gz` companion of a
/// matched file is removed best-effort; a missing directory prunes nothing.
/// Failure to delete a matched primary file propagates.
///
/// Returns the number of primary files removed.
pub fn prune(dir: &Path, template: &str, cfg: &VersionConfig) -> Result<usize, PressError> {
    if !dir.exists() {
        return Ok(0);
    }
    let regex = version_pattern(basename(template), false, cfg)?;
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !regex.is_match(name) {
            continue;
        }

        debug!("prune"; "removing stale file {name}");
        fs::remove_file(entry.path())?;
        let _ = fs::remove_file(gz_path(&entry.path())); // companion may not exist
        removed += 1;
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_save_file_writes_pair() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("css/screen.r1.css");

        save_file(&path, b"body{color:red}").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"body{color:red}");

        let mut decoder = GzDecoder::new(File::open(gz_path(&path)).unwrap());
        let mut plain = Vec::new();
        decoder.read_to_end(&mut plain).unwrap();
        assert_eq!(plain, b"body{color:red}");
    }

    #[test]
    fn test_save_file_truncates_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.r1.js");

        save_file(&path, b"first version, longer contents").unwrap();
        save_file(&path, b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_prune_removes_stale_pair() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.rabc123.js"), "").unwrap();
        fs::write(dir.path().join("app.rabc123.js.gz"), "").unwrap();

        let removed = prune(dir.path(), "app.r?.js", &VersionConfig::default()).unwrap();

        assert_eq!(removed, 1);
        assert!(!dir.path().join("app.rabc123.js").exists());
        assert!(!dir.path().join("app.rabc123.js.gz").exists());
    }

    #[test]
    fn test_prune_leaves_non_matching_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.rabc123.js"), "").unwrap();
        fs::write(dir.path().join("xapp.rabc123.js"), "").unwrap();
        fs::write(dir.path().join("app.rabc123.js.bak"), "").unwrap();
        fs::write(dir.path().join("other.js"), "").unwrap();

        let removed = prune(dir.path(), "app.r?.js", &VersionConfig::default()).unwrap();

        assert_eq!(removed, 1);
        assert!(dir.path().join("xapp.rabc123.js").exists());
        assert!(dir.path().join("app.rabc123.js.bak").exists());
        assert!(dir.path().join("other.js").exists());
    }

    #[test]
    fn test_prune_missing_dir_is_noop() {
        let removed = prune(
            Path::new("/nonexistent/path"),
            "app.r?.js",
            &VersionConfig::default(),
        )
        .unwrap();
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_prune_missing_gz_companion_is_fine() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.r1.js"), "").unwrap();

        let removed = prune(dir.path(), "app.r?.js", &VersionConfig::default()).unwrap();
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_prune_uses_template_basename() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("screen.r9.css"), "").unwrap();

        let removed = prune(dir.path(), "css/screen.r?.css", &VersionConfig::default()).unwrap();
        assert_eq!(removed, 1);
    }
}
