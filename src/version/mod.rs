//! Pluggable versioning strategies behind an explicit registry.
//!
//! Strategies decide version tokens and staleness for a bundle's sources.
//! They are selected by the `version.strategy` configuration key and looked
//! up in a name -> constructor map populated at startup.

mod hash;
mod mtime;

pub use hash::HashVersioning;
pub use mtime::MtimeVersioning;

use std::path::PathBuf;

use rustc_hash::FxHashMap;

use crate::asset::version::{resolve_filename, version_from_file};
use crate::config::VersionConfig;
use crate::error::PressError;

/// Policy deciding version tokens and staleness for a bundle's sources.
pub trait VersioningStrategy {
    /// Compute the version token for `sources` (paths relative to media root).
    fn get_version(&self, sources: &[PathBuf]) -> Result<String, PressError>;

    /// Whether the on-disk output for `output_template` is stale relative to
    /// `version`.
    fn needs_update(
        &self,
        output_template: &str,
        sources: &[PathBuf],
        version: &str,
    ) -> Result<bool, PressError>;
}

/// Construction context handed to strategy constructors.
#[derive(Debug, Clone)]
pub struct StrategyContext {
    pub media_root: PathBuf,
    pub version: VersionConfig,
}

pub type StrategyCtor = fn(StrategyContext) -> Box<dyn VersioningStrategy>;

/// Name -> constructor map for versioning strategies.
pub struct StrategyRegistry {
    ctors: FxHashMap<String, StrategyCtor>,
}

impl StrategyRegistry {
    /// Registry with the built-in `mtime` and `hash` strategies.
    pub fn builtin() -> Self {
        let mut registry = Self {
            ctors: FxHashMap::default(),
        };
        registry.register("mtime", |ctx| Box::new(MtimeVersioning::new(ctx)));
        registry.register("hash", |ctx| Box::new(HashVersioning::new(ctx)));
        registry
    }

    pub fn register(&mut self, name: &str, ctor: StrategyCtor) {
        self.ctors.insert(name.to_string(), ctor);
    }

    /// Resolve `name` and construct the strategy.
    pub fn resolve(
        &self,
        name: &str,
        ctx: StrategyContext,
    ) -> Result<Box<dyn VersioningStrategy>, PressError> {
        let ctor = self
            .ctors
            .get(name)
            .ok_or_else(|| PressError::StrategyLoad(name.to_string()))?;
        Ok(ctor(ctx))
    }
}

/// Shared staleness check: compare `version` against the token embedded in
/// whatever output currently exists on disk.
pub(crate) fn version_changed(
    ctx: &StrategyContext,
    output_template: &str,
    version: &str,
) -> Result<bool, PressError> {
    let resolved = resolve_filename(output_template, Some(version), &ctx.version);
    let full = ctx.media_root.join(&resolved);
    let dir = full.parent().unwrap_or(&ctx.media_root);
    let on_disk = version_from_file(dir, output_template, &ctx.version)?;
    Ok(on_disk.as_deref() != Some(version))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> StrategyContext {
        StrategyContext {
            media_root: PathBuf::from("/tmp"),
            version: VersionConfig::default(),
        }
    }

    #[test]
    fn test_builtin_strategies_resolve() {
        let registry = StrategyRegistry::builtin();
        assert!(registry.resolve("mtime", context()).is_ok());
        assert!(registry.resolve("hash", context()).is_ok());
    }

    #[test]
    fn test_unknown_strategy_fails_to_load() {
        let registry = StrategyRegistry::builtin();
        let err = registry.resolve("git-describe", context()).err().unwrap();
        match err {
            PressError::StrategyLoad(name) => assert_eq!(name, "git-describe"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_custom_strategy_registration() {
        struct Fixed;
        impl VersioningStrategy for Fixed {
            fn get_version(&self, _sources: &[PathBuf]) -> Result<String, PressError> {
                Ok("fixed".into())
            }
            fn needs_update(
                &self,
                _output_template: &str,
                _sources: &[PathBuf],
                _version: &str,
            ) -> Result<bool, PressError> {
                Ok(false)
            }
        }

        let mut registry = StrategyRegistry::builtin();
        registry.register("fixed", |_ctx| Box::new(Fixed));
        let strategy = registry.resolve("fixed", context()).unwrap();
        assert_eq!(strategy.get_version(&[]).unwrap(), "fixed");
    }
}
