//! `list` subcommand: show bundles with their current output names and URLs.

use anyhow::Result;

use crate::asset::version::resolve_filename;
use crate::config::PressConfig;
use crate::log;
use crate::pipeline::Compressor;

/// Print each bundle with its resolved output name and media URL.
pub fn run(config: &PressConfig) -> Result<()> {
    let compressor = Compressor::new(config);
    for (kind, name, bundle) in config.bundles() {
        let (stale, version) = compressor.needs_update(bundle)?;
        let filename = resolve_filename(&bundle.output_filename, Some(&version), &config.version);
        let state = if stale { "stale" } else { "fresh" };
        log!(kind.label(); "{name}: {} ({state})", config.media_url_for(&filename));
    }
    Ok(())
}
