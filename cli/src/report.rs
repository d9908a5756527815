//! Per-token classification report.

use arg_token_core::{ArgToken, classify};
use serde::Serialize;

/// Classification of one input token together with its derived queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenReport {
    /// The raw token as read.
    pub input: String,
    /// Classified token (tagged by `kind`).
    pub token: ArgToken,
    pub is_flag: bool,
    pub requires_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_flags: Option<Vec<String>>,
}

impl TokenReport {
    /// Classifies `input` and records every query result.
    pub fn new(input: &str) -> Self {
        let token = classify(input);
        Self {
            input: input.to_string(),
            is_flag: token.is_flag(),
            requires_value: token.requires_value(),
            flag_name: token.flag_name().map(String::from),
            inline_value: token.inline_value().map(String::from),
            cluster_flags: token.cluster_flags(),
            token,
        }
    }
}

/// Builds one report per token, in input order.
pub fn build_reports<S: AsRef<str>>(tokens: &[S]) -> Vec<TokenReport> {
    tokens.iter().map(|t| TokenReport::new(t.as_ref())).collect()
}
