//! Pipeline error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the compression pipeline.
#[derive(Debug, Error)]
pub enum PressError {
    /// A configured filter name has no registered constructor.
    #[error("failed to load filter `{0}`")]
    FilterLoad(String),

    /// A configured versioning strategy has no registered constructor.
    #[error("failed to load versioning strategy `{0}`")]
    StrategyLoad(String),

    /// A bundle source could not be read.
    #[error("failed to read source `{path}`")]
    Source {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Concatenated content is not valid UTF-8, so text filters cannot run.
    #[error("bundle `{bundle}` is not valid UTF-8")]
    NotUtf8 { bundle: String },

    /// A filter rejected its input.
    #[error("filter `{name}` failed: {reason}")]
    Filter { name: String, reason: String },

    /// A filename template produced an invalid match pattern.
    #[error("invalid version pattern for `{template}`")]
    Pattern {
        template: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
