//! YAML configuration for the `argtok` front end.
//!
//! Every field is optional; explicit command-line flags win over the file,
//! and the file wins over the built-in defaults.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! format: table
//! split: lines
//! log_level: debug
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::error::{CliError, Result};

/// Config format version this build understands.
pub const CONFIG_VERSION: &str = "1.0";

/// Rendering used for classification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Markdown,
    Table,
}

/// How stdin or a file is cut into raw tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Any run of whitespace separates tokens.
    #[default]
    Whitespace,
    /// One token per line, kept verbatim (empty lines are empty tokens).
    Lines,
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    /// Default output format.
    pub format: OutputFormat,
    /// Default input split mode for `classify-stdin` and `classify-file`.
    pub split: SplitMode,
    /// Log level used when neither `ARGTOK_LOG` nor `--verbose` is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            format: OutputFormat::default(),
            split: SplitMode::default(),
            log_level: None,
        }
    }
}

impl CliConfig {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ReadFile`](CliError::ReadFile) if the file cannot be
    /// opened, [`YamlError`](CliError::YamlError) if parsing fails, or
    /// [`InvalidConfig`](CliError::InvalidConfig) if a field is unusable.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CliError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Checks the version and log level.
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(CliError::InvalidConfig(format!(
                "unsupported version '{}' (expected '{CONFIG_VERSION}')",
                self.version
            )));
        }
        if let Some(level) = &self.log_level {
            level.parse::<LevelFilter>().map_err(|_| {
                CliError::InvalidConfig(format!("unknown log level '{level}'"))
            })?;
        }
        Ok(())
    }

    /// Parsed [`log_level`](Self::log_level), if set and valid.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level.as_deref().and_then(|level| level.parse().ok())
    }
}
