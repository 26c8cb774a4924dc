//! Per-invocation run context: resolved config, working directory and the
//! discovered source files.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{
    config::{Config, ConfigOverrides, load_config},
    core::file_scanner::{ScanOptions, scan_files},
};

pub struct RunContext {
    pub config: Config,
    /// Working directory; stripped from paths shown to the user.
    pub cwd: PathBuf,
    /// Canonical source root.
    pub source_root: PathBuf,
    /// Where the variable listing goes.
    output: PathBuf,
    /// Files to process, sorted by path.
    pub files: Vec<PathBuf>,
    pub verbose: bool,
}

impl RunContext {
    pub fn new(overrides: &ConfigOverrides, verbose: bool) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine working directory")?;
        let cwd = cwd.canonicalize().unwrap_or(cwd);
        Self::in_dir(&cwd, overrides, verbose)
    }

    pub fn in_dir(cwd: &Path, overrides: &ConfigOverrides, verbose: bool) -> Result<Self> {
        let loaded = load_config(cwd)?;
        if verbose && !loaded.from_file {
            eprintln!("{} No config file found, using defaults", "note:".bold().cyan());
        }
        // Paths from the config file are relative to the file; paths given on
        // the command line are relative to the working directory
        let resolve = |flag: &Option<PathBuf>, configured: &str| match flag {
            Some(path) => cwd.join(path),
            None => loaded.base_dir.join(configured),
        };
        let root = resolve(&overrides.source_root, &loaded.config.source_root);
        let output = resolve(&overrides.output, &loaded.config.output);
        let config = loaded.config.with_overrides(overrides);

        let source_root = root
            .canonicalize()
            .with_context(|| format!("Source root does not exist: {}", root.display()))?;

        let scan = scan_files(&ScanOptions {
            base_dir: &source_root,
            includes: &config.includes,
            ignores: &config.ignores,
            extensions: &config.extensions,
            ignore_node_modules: config.ignore_node_modules,
            verbose,
        });
        if verbose && scan.skipped_count > 0 {
            eprintln!(
                "{} Skipped {} inaccessible path(s)",
                "warning:".bold().yellow(),
                scan.skipped_count
            );
        }

        Ok(Self {
            config,
            cwd: cwd.to_path_buf(),
            source_root,
            output,
            files: scan.files,
            verbose,
        })
    }

    /// Where the variable listing goes.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone()
    }

    /// `path` relative to the working directory when possible, for messages.
    pub fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.cwd)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
