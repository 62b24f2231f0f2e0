//! Asset kind definitions.

use crate::error::PressError;
use crate::filter::AssetFilter;

/// Kind of asset bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Css,
    Js,
}

impl AssetKind {
    /// Label used in logs and completion notifications.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Js => "js",
        }
    }

    /// Run the kind-appropriate filter method on `text`.
    pub fn apply(self, filter: &dyn AssetFilter, text: String) -> Result<String, PressError> {
        match self {
            Self::Css => filter.filter_css(text),
            Self::Js => filter.filter_js(text),
        }
    }
}
