//! Command-line interface module.

mod args;
pub mod build;
pub mod clean;
pub mod list;

pub use args::{Cli, Commands};
