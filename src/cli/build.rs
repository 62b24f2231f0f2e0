//! `build` subcommand: rebuild stale bundles.

use anyhow::{Result, bail};

use crate::config::PressConfig;
use crate::pipeline::{Compressor, Outcome};
use crate::{debug, log};

/// Rebuild all bundles, or the named subset.
pub fn run(config: &PressConfig, names: &[String], force: bool) -> Result<()> {
    for name in names {
        if !config.css.contains_key(name) && !config.js.contains_key(name) {
            bail!("unknown bundle `{name}`");
        }
    }

    let compressor = Compressor::new(config)
        .with_listener(|kind| debug!("signal"; "{} filtered", kind.label()));

    let mut written = 0usize;
    let mut fresh = 0usize;
    for (kind, name, bundle) in config.bundles() {
        if !names.is_empty() && !names.contains(name) {
            continue;
        }
        match compressor.compress(name, kind, bundle, force)? {
            Outcome::Written { filename } => {
                debug!("build"; "{name}: {}", config.media_url_for(&filename));
                written += 1;
            }
            Outcome::Fresh => fresh += 1,
        }
    }

    log!("build"; "{written} bundle(s) written, {fresh} fresh");
    Ok(())
}
