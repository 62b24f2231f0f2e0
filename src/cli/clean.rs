//! `clean` subcommand: remove generated outputs.

use anyhow::Result;

use crate::asset::prune;
use crate::config::PressConfig;
use crate::log;

/// Remove every output matching a bundle's versioned pattern, gzip copies
/// included (current versions too, unlike the pruning during build).
pub fn run(config: &PressConfig) -> Result<()> {
    let mut removed = 0;
    for (_, _, bundle) in config.bundles() {
        let output = config.media_path(&bundle.output_filename);
        let dir = output
            .parent()
            .map(std::path::Path::to_path_buf)
            .unwrap_or_else(|| config.media_root.clone());
        removed += prune(&dir, &bundle.output_filename, &config.version)?;
    }
    log!("clean"; "removed {removed} file(s)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_generated_outputs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("out")).unwrap();
        fs::write(dir.path().join("out/app.rabc.js"), "").unwrap();
        fs::write(dir.path().join("out/app.rabc.js.gz"), "").unwrap();
        fs::write(dir.path().join("out/keep.js"), "").unwrap();

        let mut config = PressConfig::from_str(
            r#"
[js.app]
source_filenames = ["a.js"]
output_filename = "out/app.r?.js"
"#,
        )
        .unwrap();
        config.media_root = dir.path().to_path_buf();

        run(&config).unwrap();

        assert!(!dir.path().join("out/app.rabc.js").exists());
        assert!(!dir.path().join("out/app.rabc.js.gz").exists());
        assert!(dir.path().join("out/keep.js").exists());
    }
}
