//! Command-line interface.
//!
//! Handles file discovery, configuration and output publishing around the
//! library pipeline in [`crate::core`].

use anyhow::Result;

mod args;
mod commands;
mod context;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, BuildCommand, Command, CommonArgs, RewriteCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
