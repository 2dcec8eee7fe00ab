//! hedwig_options: `hedwig.json` parsing and driver options.
//!
//! A project file lists the sources to scan and how results are printed.
//! Every field is optional; command-line flags override whatever is set here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Default project file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "hedwig.json";

/// How tokens and diagnostics are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line.
    #[default]
    Text,
    /// A single JSON document per run.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// The `hedwig.json` file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HedwigConfig {
    /// Source files, relative to the directory containing the config file.
    pub files: Option<Vec<String>>,
    pub format: Option<OutputFormat>,
    /// Render diagnostics with source snippets.
    pub pretty: Option<bool>,
}

/// Fully resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub files: Vec<PathBuf>,
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            format: OutputFormat::Text,
            pretty: true,
        }
    }
}

impl ScanOptions {
    /// Resolve a config loaded from `config_path`: file entries become paths
    /// relative to the config file's directory.
    pub fn from_config(config: &HedwigConfig, config_path: &Path) -> Self {
        let root = config_path.parent().unwrap_or_else(|| Path::new(""));
        let defaults = Self::default();
        Self {
            files: config
                .files
                .iter()
                .flatten()
                .map(|f| root.join(f))
                .collect(),
            format: config.format.unwrap_or(defaults.format),
            pretty: config.pretty.unwrap_or(defaults.pretty),
        }
    }
}

/// Errors from loading a project file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid project file '{}'", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown output format '{0}', expected 'text' or 'json'")]
    UnknownFormat(String),
}

/// Parse a `hedwig.json` document from a string.
pub fn parse_config(content: &str) -> Result<HedwigConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a `hedwig.json` file from a path.
pub fn parse_config_file(path: &Path) -> Result<HedwigConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?config, "loaded project file");
    Ok(config)
}
