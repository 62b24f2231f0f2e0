//! Bundle concatenation, filename versioning and output management.

mod concat;
mod kind;
mod output;
pub mod version;

pub use concat::concat;
pub use kind::AssetKind;
pub use output::{gz_path, prune, save_file};
