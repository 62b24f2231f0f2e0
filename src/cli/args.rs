//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// assetpress CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: assetpress.toml)
    #[arg(short = 'C', long, default_value = "assetpress.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Verbosity (-v: log removed/saved files, -vv: verbose filters)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Rebuild stale bundles
    #[command(visible_alias = "b")]
    Build {
        /// Bundle names to rebuild (all bundles when omitted)
        names: Vec<String>,

        /// Rebuild even when outputs are current
        #[arg(short, long)]
        force: bool,
    },

    /// List bundles with their current output names and URLs
    #[command(visible_alias = "l")]
    List,

    /// Remove generated versioned outputs
    Clean,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args() {
        let cli = Cli::parse_from(["assetpress", "build", "screen", "app", "--force", "-vv"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Build { names, force } => {
                assert_eq!(names, vec!["screen", "app"]);
                assert!(force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_default() {
        let cli = Cli::parse_from(["assetpress", "list"]);
        assert_eq!(cli.config, PathBuf::from("assetpress.toml"));
        assert_eq!(cli.verbose, 0);
    }
}
