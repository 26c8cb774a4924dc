use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::file_scanner::is_glob_pattern;

pub const CONFIG_FILE_NAME: &str = ".reddotrc.json";

/// Settings for one run.
///
/// Built once from defaults, the config file and command-line overrides;
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Lines written before the variable listing.
    #[serde(default = "default_prefix")]
    pub prefix: Vec<String>,
    /// Lines written after the variable listing.
    #[serde(default = "default_postfix")]
    pub postfix: Vec<String>,
    /// Where the variable listing is written.
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    /// File extensions scanned and rewritten, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_ignore_node_modules")]
    pub ignore_node_modules: bool,
}

fn default_prefix() -> Vec<String> {
    ["<!IoRangePreExecute>", "<%"].map(String::from).to_vec()
}

fn default_postfix() -> Vec<String> {
    ["%>", "<!/IoRangePreExecute>"].map(String::from).to_vec()
}

fn default_output() -> String {
    "reddot/jsvars.txt".to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["js".to_string()]
}

fn default_ignore_node_modules() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            postfix: default_postfix(),
            output: default_output(),
            source_root: default_source_root(),
            includes: Vec::new(),
            ignores: Vec::new(),
            extensions: default_extensions(),
            ignore_node_modules: default_ignore_node_modules(),
        }
    }
}

/// Values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source_root: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern is invalid or no extension is
    /// configured.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        for pattern in &self.includes {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        Ok(())
    }

    /// A new config with `overrides` applied on top of this one.
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut config = self.clone();
        if let Some(source_root) = &overrides.source_root {
            config.source_root = source_root.to_string_lossy().into_owned();
        }
        if let Some(output) = &overrides.output {
            config.output = output.to_string_lossy().into_owned();
        }
        config
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory that relative paths in the config are resolved against:
    /// the one holding the config file, or the search start for defaults.
    pub base_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path.parent().unwrap_or(start_dir).to_path_buf();
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
