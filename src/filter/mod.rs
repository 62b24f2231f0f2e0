//! Pluggable text filters behind an explicit registry.
//!
//! Filters are selected by name from configuration and applied in order;
//! each filter's output is the next filter's input.

mod minify;

pub use minify::{CssMinifier, JsMinifier};

use rustc_hash::FxHashMap;

use crate::error::PressError;

/// Text transformer applied to concatenated bundle content.
///
/// Implementations override the method for the kind they handle; the other
/// method passes content through unchanged.
pub trait AssetFilter {
    fn filter_css(&self, content: String) -> Result<String, PressError> {
        Ok(content)
    }

    fn filter_js(&self, content: String) -> Result<String, PressError> {
        Ok(content)
    }
}

pub type FilterCtor = fn(verbose: bool) -> Box<dyn AssetFilter>;

/// Name -> constructor map for filters.
pub struct FilterRegistry {
    ctors: FxHashMap<String, FilterCtor>,
}

impl FilterRegistry {
    /// Registry with the built-in minifiers.
    pub fn builtin() -> Self {
        let mut registry = Self {
            ctors: FxHashMap::default(),
        };
        registry.register("minify-css", |verbose| Box::new(CssMinifier::new(verbose)));
        registry.register("minify-js", |verbose| Box::new(JsMinifier::new(verbose)));
        registry
    }

    pub fn register(&mut self, name: &str, ctor: FilterCtor) {
        self.ctors.insert(name.to_string(), ctor);
    }

    /// Resolve `name` and construct the filter.
    pub fn resolve(&self, name: &str, verbose: bool) -> Result<Box<dyn AssetFilter>, PressError> {
        let ctor = self
            .ctors
            .get(name)
            .ok_or_else(|| PressError::FilterLoad(name.to_string()))?;
        Ok(ctor(verbose))
    }
}
