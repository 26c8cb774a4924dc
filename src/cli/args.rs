//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Collect annotations into the RedDot variable listing
//! - `rewrite`: Replace annotations with RedDot placeholders
//! - `init`: Initialize a configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Variable listing path (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the listing to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Debug, Args)]
pub struct RewriteCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Rewrite source files in place (default is dry-run)
    #[arg(long, conflicts_with = "out_dir")]
    pub apply: bool,

    /// Write rewritten copies under this directory instead of touching sources
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect annotated variables into the RedDot variable listing
    Build(BuildCommand),
    /// Replace annotations with RedDot placeholder expressions
    Rewrite(RewriteCommand),
    /// Initialize a new .reddotrc.json configuration file
    Init,
}

impl CommonArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source_root: self.source_root.clone(),
            output: None,
        }
    }
}

impl BuildCommand {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            output: self.output.clone(),
            ..self.common.overrides()
        }
    }
}
