//! Lexical classification of raw command-line argument tokens.
//!
//! This crate answers one question about a single argv entry: what does it
//! look like? The answer is an [`ArgToken`]:
//!
//! - [`ArgToken::LongFlag`] / [`ArgToken::LongFlagWithEqual`] — `--name`,
//!   `--name=value`.
//! - [`ArgToken::ShortFlag`] / [`ArgToken::ShortFlagWithEqual`] — `-x`,
//!   `-x=value`.
//! - [`ArgToken::ShortMultiFlag`] — a bundle of boolean short flags (`-xvf`).
//! - [`ArgToken::InvalidFlag`] — `---name` or a bare `-`.
//! - [`ArgToken::PositionalArgument`] — everything else.
//!
//! Classification ([`classify`]) never fails and keeps no state between
//! calls. Binding tokens to registered options, reading the next token as a
//! value when [`ArgToken::requires_value`] says so, and reporting errors
//! for [`ArgToken::InvalidFlag`] are left to the caller.
//!
//! # Example
//!
//! ```
//! use arg_token_core::*;
//!
//! let argv = ["-xvf", "archive.tar", "--level=9", "--exclude", "*.log"];
//! let tokens = classify_all(argv);
//!
//! assert_eq!(tokens[0].cluster_flags().unwrap(), vec!["x", "v", "f"]);
//! assert_eq!(tokens[2].flag_name(), Some("level"));
//! assert_eq!(tokens[2].inline_value(), Some("9"));
//! assert!(tokens[3].requires_value());
//! assert!(!tokens[4].is_flag());
//! ```

mod classify;
mod scan;
mod token;

pub use classify::{classify, classify_all};
pub use scan::{EQUAL, has_equal, multi_flag_candidate, split_on_equal};
pub use token::{ArgToken, TokenKind};
