//! The compression pipeline: rebuild decision, filtering and output.
//!
//! Per bundle: decide staleness (output existence, then strategy delegation),
//! concatenate sources, run the filter pipeline, apply the post-processor,
//! prune stale versioned outputs, write the new output pair and notify the
//! registered listener.

mod postprocess;

pub use postprocess::{PostProcess, ViewerVersionTags};

use crate::asset::version::resolve_filename;
use crate::asset::{AssetKind, concat, prune, save_file};
use crate::config::{AssetBundle, PressConfig};
use crate::debug;
use crate::error::PressError;
use crate::filter::FilterRegistry;
use crate::logger;
use crate::version::{StrategyContext, StrategyRegistry};

/// Result of compressing one bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new output pair was written under this media-relative filename.
    Written { filename: String },
    /// The existing output is current; nothing was written.
    Fresh,
}

/// Listener invoked with the bundle's kind after each successful write.
pub type FilteredListener = Box<dyn Fn(AssetKind)>;

pub struct Compressor<'a> {
    config: &'a PressConfig,
    filters: FilterRegistry,
    strategies: StrategyRegistry,
    post: Option<Box<dyn PostProcess>>,
    listener: Option<FilteredListener>,
}

impl<'a> Compressor<'a> {
    /// Compressor with built-in registries and the configured post-processor.
    pub fn new(config: &'a PressConfig) -> Self {
        let post: Option<Box<dyn PostProcess>> = if config.post_process.enable {
            Some(Box::new(ViewerVersionTags::from_config(
                &config.post_process,
                &config.media_root,
                &config.version,
            )))
        } else {
            None
        };
        Self {
            config,
            filters: FilterRegistry::builtin(),
            strategies: StrategyRegistry::builtin(),
            post,
            listener: None,
        }
    }

    /// Replace the filter registry (for custom filters).
    pub fn with_filters(mut self, filters: FilterRegistry) -> Self {
        self.filters = filters;
        self
    }

    /// Replace the strategy registry (for custom versioning strategies).
    pub fn with_strategies(mut self, strategies: StrategyRegistry) -> Self {
        self.strategies = strategies;
        self
    }

    /// Replace the post-processor.
    pub fn with_post_process(mut self, post: Box<dyn PostProcess>) -> Self {
        self.post = Some(post);
        self
    }

    /// Register the completion listener invoked after each successful write.
    pub fn with_listener(mut self, listener: impl Fn(AssetKind) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    fn strategy_context(&self) -> StrategyContext {
        StrategyContext {
            media_root: self.config.media_root.clone(),
            version: self.config.version.clone(),
        }
    }

    /// Whether `bundle` must be rebuilt, along with the computed version token.
    ///
    /// A missing output answers "stale" immediately; otherwise the decision
    /// is delegated to the versioning strategy.
    pub fn needs_update(&self, bundle: &AssetBundle) -> Result<(bool, String), PressError> {
        let strategy = self
            .strategies
            .resolve(&self.config.version.strategy, self.strategy_context())?;
        let version = strategy.get_version(&bundle.source_filenames)?;

        let resolved = resolve_filename(&bundle.output_filename, Some(&version), &self.config.version);
        if !self.config.media_root.join(&resolved).exists() {
            return Ok((true, version));
        }

        let stale =
            strategy.needs_update(&bundle.output_filename, &bundle.source_filenames, &version)?;
        Ok((stale, version))
    }

    /// Rebuild `bundle` if stale (or `force`), returning what happened.
    pub fn compress(
        &self,
        name: &str,
        kind: AssetKind,
        bundle: &AssetBundle,
        force: bool,
    ) -> Result<Outcome, PressError> {
        let (stale, version) = self.needs_update(bundle)?;
        if !stale && !force {
            return Ok(Outcome::Fresh);
        }

        let raw = concat(&self.config.media_root, &bundle.source_filenames, b"")?;
        let mut text = String::from_utf8(raw).map_err(|_| PressError::NotUtf8 {
            bundle: name.to_string(),
        })?;

        let verbose_filters = logger::verbosity() >= 2;
        for filter_name in self.config.filter_names(kind, bundle) {
            let filter = self.filters.resolve(filter_name, verbose_filters)?;
            text = kind.apply(filter.as_ref(), text)?;
        }

        if let Some(post) = &self.post {
            text = post.apply(text)?;
        }

        let filename =
            resolve_filename(&bundle.output_filename, Some(&version), &self.config.version);
        let output = self.config.media_path(&filename);

        if self.config.version.enable {
            let dir = output.parent().unwrap_or(&self.config.media_root);
            prune(dir, &bundle.output_filename, &self.config.version)?;
        }

        debug!("save"; "{filename}");
        save_file(&output, text.as_bytes())?;

        if let Some(listener) = &self.listener {
            listener(kind);
        }

        Ok(Outcome::Written { filename })
    }
}
