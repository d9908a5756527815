//! Error types for the `argtok` front end.
//!
//! Token classification itself cannot fail; everything here comes from
//! reading input, loading configuration, or rendering output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running a subcommand.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A named file could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Refused to overwrite an existing file.
    #[error("'{}' already exists (pass --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// Configuration parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Stdin or the input file held no tokens.
    #[error("no tokens to classify")]
    EmptyInput,
}

/// Convenience alias for results with [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;
