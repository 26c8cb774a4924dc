//! Build command - Write the RedDot variable listing.
//!
//! Scans the source files, collects every annotated variable and writes the
//! aligned listing to the configured output. Any unreadable file aborts the
//! command before anything is written.

use anyhow::Result;

use super::super::{
    args::BuildCommand,
    context::RunContext,
    exit_status::ExitStatus,
    report::{self, plural},
};
use crate::core::{ReportLayout, collect_declarations, render_report, write_text};

pub fn build(cmd: BuildCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(&cmd.overrides(), cmd.common.verbose)?;

    if ctx.files.is_empty() && ctx.verbose {
        report::print_no_files(&ctx.config.source_root);
    }

    let declarations = collect_declarations(&ctx.files)?;
    let layout = ReportLayout {
        prefix: &ctx.config.prefix,
        postfix: &ctx.config.postfix,
        base: Some(ctx.cwd.as_path()),
    };
    let listing = render_report(&declarations, &layout);

    if cmd.stdout {
        println!("{}", listing);
        return Ok(ExitStatus::Success);
    }

    let output = ctx.output_path();
    write_text(&output, &listing)?;

    if ctx.verbose {
        for decl in &declarations {
            println!("  {} <- {}", decl.name, ctx.display(&decl.file));
        }
    }
    report::print_success(&format!(
        "Wrote {} from {} to {}",
        plural(declarations.len(), "variable"),
        plural(ctx.files.len(), "file"),
        ctx.display(&output)
    ));

    Ok(ExitStatus::Success)
}
