//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Link normalizer for the compound knowledge base output tree
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory to rewrite (default: current directory)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Config file name, searched upward from the root (default: relink.toml)
    #[arg(short = 'C', long, global = true, default_value = "relink.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands (default: fix)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Rewrite links in place and provision placeholder pages
    #[command(visible_alias = "f")]
    Fix,

    /// Report what `fix` would change without writing anything
    #[command(visible_alias = "c")]
    Check,
}

impl Cli {
    /// Subcommand to run; bare `relink` fixes.
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Fix)
    }

    pub fn is_dry_run(&self) -> bool {
        self.command() == Commands::Check
    }
}
