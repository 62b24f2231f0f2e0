//! Filename versioning: placeholder substitution and version extraction.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::VersionConfig;
use crate::error::PressError;

/// Substitute the version placeholder in `template`.
///
/// When versioning is enabled and a token is supplied, every occurrence of
/// the placeholder becomes the token; otherwise the configured default.
pub fn resolve_filename(template: &str, version: Option<&str>, cfg: &VersionConfig) -> String {
    let token = match version {
        Some(token) if cfg.enable => token,
        _ => cfg.default.as_str(),
    };
    template.replace(&cfg.placeholder, token)
}

/// Build the anchored pattern matching resolved instances of `template`.
///
/// Literal segments are escaped; the placeholder becomes an alphanumeric
/// wildcard (capturing when `capture` is set). With versioning disabled the
/// pattern matches the default token instead, mirroring `resolve_filename`.
pub fn version_pattern(
    template: &str,
    capture: bool,
    cfg: &VersionConfig,
) -> Result<Regex, PressError> {
    let wildcard = if capture {
        "([A-Za-z0-9]+)"
    } else {
        "[A-Za-z0-9]+"
    };
    let escaped = template
        .split(cfg.placeholder.as_str())
        .map(|part| regex::escape(part))
        .collect::<Vec<_>>()
        .join(&cfg.placeholder);
    let pattern = resolve_filename(&escaped, Some(wildcard), cfg);
    Regex::new(&format!("^{pattern}$")).map_err(|source| PressError::Pattern {
        template: template.to_string(),
        source,
    })
}

/// Extract the version token of the first file in `dir` matching `template`.
///
/// A missing or unreadable directory yields `None` (no versioned output yet).
pub fn version_from_file(
    dir: &Path,
    template: &str,
    cfg: &VersionConfig,
) -> Result<Option<String>, PressError> {
    let regex = version_pattern(basename(template), true, cfg)?;
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(None),
    };
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if let Some(caps) = regex.captures(name)
            && let Some(token) = caps.get(1)
        {
            return Ok(Some(token.as_str().to_string()));
        }
    }
    Ok(None)
}

/// Final path component of a template (templates may carry directories).
pub(crate) fn basename(template: &str) -> &str {
    match template.rfind('/') {
        Some(i) => &template[i + 1..],
        None => template,
    }
}
