//! Reading raw tokens from stdin or a file.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::config::SplitMode;
use crate::error::{CliError, Result};

/// Cuts `text` into raw tokens.
pub fn split_tokens(text: &str, mode: SplitMode) -> Vec<String> {
    match mode {
        SplitMode::Whitespace => text.split_whitespace().map(String::from).collect(),
        SplitMode::Lines => text.lines().map(String::from).collect(),
    }
}

/// Reads all of stdin and splits it into tokens.
pub fn read_stdin(mode: SplitMode) -> Result<Vec<String>> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    non_empty(split_tokens(&text, mode), "stdin")
}

/// Reads `path` and splits it into tokens.
pub fn read_file(path: &Path, mode: SplitMode) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    non_empty(split_tokens(&text, mode), &path.display().to_string())
}

fn non_empty(tokens: Vec<String>, origin: &str) -> Result<Vec<String>> {
    debug!(origin, count = tokens.len(), "Read raw tokens");
    if tokens.is_empty() {
        return Err(CliError::EmptyInput);
    }
    Ok(tokens)
}
