//! Rewrite command - Replace annotations with RedDot placeholders.
//!
//! Without flags this is a dry run listing the files that contain
//! annotations. `--apply` rewrites those files in place; `--out-dir` writes
//! every scanned file, rewritten, into a mirror of the source tree.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{
    args::RewriteCommand,
    context::RunContext,
    exit_status::ExitStatus,
    report::{self, plural},
};
use crate::core::{extract::read_source, rewrite_counted, write_text};

struct RewrittenFile {
    path: PathBuf,
    contents: String,
    annotations: usize,
}

pub fn rewrite(cmd: RewriteCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(&cmd.common.overrides(), cmd.common.verbose)?;

    if ctx.files.is_empty() {
        report::print_no_files(&ctx.config.source_root);
        return Ok(ExitStatus::Success);
    }

    let rewritten = rewrite_all(&ctx.files)?;
    let changed: Vec<&RewrittenFile> = rewritten.iter().filter(|f| f.annotations > 0).collect();
    let annotation_count: usize = changed.iter().map(|f| f.annotations).sum();

    if let Some(out_dir) = &cmd.out_dir {
        let out_dir = ctx.cwd.join(out_dir);
        // Every target is checked before anything is written
        let targets = rewritten
            .iter()
            .map(|file| mirror_path(&file.path, &ctx.source_root, &out_dir))
            .collect::<Result<Vec<_>>>()?;
        for (file, target) in rewritten.iter().zip(&targets) {
            write_text(target, &file.contents)?;
        }
        report::print_success(&format!(
            "Rewrote {} in {}, wrote {} to {}",
            plural(annotation_count, "annotation"),
            plural(changed.len(), "file"),
            plural(rewritten.len(), "file"),
            ctx.display(&out_dir)
        ));
        return Ok(ExitStatus::Success);
    }

    if changed.is_empty() {
        report::print_success(&format!(
            "No annotations found in {}",
            plural(rewritten.len(), "file")
        ));
        return Ok(ExitStatus::Success);
    }

    if cmd.apply {
        for file in &changed {
            write_text(&file.path, &file.contents)?;
        }
        println!(
            "{} {} in {}.",
            "Rewrote".green().bold(),
            plural(annotation_count, "annotation"),
            plural(changed.len(), "file")
        );
        return Ok(ExitStatus::Success);
    }

    for file in &changed {
        println!(
            "  {} ({})",
            ctx.display(&file.path),
            plural(file.annotations, "annotation")
        );
    }
    println!(
        "{} {} in {}.",
        "Would rewrite".yellow().bold(),
        plural(annotation_count, "annotation"),
        plural(changed.len(), "file")
    );
    println!(
        "Run with {} to rewrite in place, or {} to write copies.",
        "--apply".cyan(),
        "--out-dir <DIR>".cyan()
    );

    // There is work to do, same as a linter finding issues
    Ok(ExitStatus::Failure)
}

fn rewrite_all(files: &[PathBuf]) -> Result<Vec<RewrittenFile>> {
    files
        .iter()
        .map(|path| -> Result<RewrittenFile> {
            let source = read_source(path)?;
            let (contents, annotations) = rewrite_counted(&source);
            Ok(RewrittenFile {
                path: path.clone(),
                contents: contents.into_owned(),
                annotations,
            })
        })
        .collect()
}

/// `file` relocated from under `source_root` to under `out_dir`.
///
/// Fails for a file outside `source_root`, which has no place in the mirror.
fn mirror_path(file: &Path, source_root: &Path, out_dir: &Path) -> Result<PathBuf> {
    let relative = file.strip_prefix(source_root).with_context(|| {
        format!(
            "{} is outside the source root {}",
            file.display(),
            source_root.display()
        )
    })?;
    Ok(out_dir.join(relative))
}
