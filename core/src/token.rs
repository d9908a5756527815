//! Argument token type definitions.
//!
//! [`ArgToken`] is the lexical shape of one raw command-line token. It is
//! designed for serialization with [`serde`] as an internally tagged object,
//! so a classified token round-trips through JSON or YAML with its variant
//! name in a `kind` field.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lexical classification of a single raw command-line token.
///
/// Exactly one variant describes any input string. Use
/// [`classify`](crate::classify) (or [`str::parse`]) to build one.
///
/// # Examples
///
/// ```
/// use arg_token_core::ArgToken;
///
/// let token: ArgToken = "--output=out.txt".parse().unwrap();
/// assert_eq!(
///     token,
///     ArgToken::LongFlagWithEqual { name: "output".into(), value: "out.txt".into() }
/// );
/// assert!(token.is_flag());
/// assert!(!token.requires_value());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArgToken {
    /// `--name` with no inline value.
    LongFlag { name: String },
    /// `--name=value`.
    LongFlagWithEqual { name: String, value: String },
    /// `-x`, or a single-character-named short flag.
    ShortFlag { name: String },
    /// `-x=value`.
    ShortFlagWithEqual { name: String, value: String },
    /// `-xyz` read as the bundled boolean flags `x`, `y` and `z`.
    ShortMultiFlag { cluster: String },
    /// Malformed flag (triple-dash prefix or a bare `-`).
    InvalidFlag { raw: String },
    /// Anything without a flag prefix.
    PositionalArgument { raw: String },
}

/// Variant name of an [`ArgToken`], without its payload.
///
/// # Examples
///
/// ```
/// use arg_token_core::{classify, TokenKind};
///
/// assert_eq!(classify("-abc").kind(), TokenKind::ShortMultiFlag);
/// assert_eq!(TokenKind::ShortMultiFlag.as_str(), "short_multi_flag");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    LongFlag,
    LongFlagWithEqual,
    ShortFlag,
    ShortFlagWithEqual,
    ShortMultiFlag,
    InvalidFlag,
    PositionalArgument,
}

impl TokenKind {
    /// Snake-case name, matching the serialized `kind` tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LongFlag => "long_flag",
            Self::LongFlagWithEqual => "long_flag_with_equal",
            Self::ShortFlag => "short_flag",
            Self::ShortFlagWithEqual => "short_flag_with_equal",
            Self::ShortMultiFlag => "short_multi_flag",
            Self::InvalidFlag => "invalid_flag",
            Self::PositionalArgument => "positional_argument",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ArgToken {
    /// Returns the variant name.
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::LongFlag { .. } => TokenKind::LongFlag,
            Self::LongFlagWithEqual { .. } => TokenKind::LongFlagWithEqual,
            Self::ShortFlag { .. } => TokenKind::ShortFlag,
            Self::ShortFlagWithEqual { .. } => TokenKind::ShortFlagWithEqual,
            Self::ShortMultiFlag { .. } => TokenKind::ShortMultiFlag,
            Self::InvalidFlag { .. } => TokenKind::InvalidFlag,
            Self::PositionalArgument { .. } => TokenKind::PositionalArgument,
        }
    }

    /// Returns `true` for the five flag variants.
    ///
    /// [`InvalidFlag`](Self::InvalidFlag) and
    /// [`PositionalArgument`](Self::PositionalArgument) are not flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use arg_token_core::classify;
    ///
    /// assert!(classify("-v").is_flag());
    /// assert!(!classify("---v").is_flag());
    /// assert!(!classify("file.txt").is_flag());
    /// ```
    pub fn is_flag(&self) -> bool {
        !matches!(
            self,
            Self::InvalidFlag { .. } | Self::PositionalArgument { .. }
        )
    }

    /// Returns `true` when the flag carries no inline value.
    ///
    /// A binding layer uses this to decide whether the *next* raw token
    /// should be consumed as this flag's value.
    ///
    /// # Examples
    ///
    /// ```
    /// use arg_token_core::classify;
    ///
    /// assert!(classify("--message").requires_value());
    /// assert!(!classify("--message=hi").requires_value());
    /// assert!(!classify("hi").requires_value());
    /// ```
    pub fn requires_value(&self) -> bool {
        matches!(
            self,
            Self::LongFlag { .. } | Self::ShortFlag { .. } | Self::ShortMultiFlag { .. }
        )
    }

    /// Returns the flag name, or the whole cluster for a multi-flag.
    ///
    /// Present exactly when [`is_flag`](Self::is_flag) is `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arg_token_core::classify;
    ///
    /// assert_eq!(classify("--color=auto").flag_name(), Some("color"));
    /// assert_eq!(classify("-xvf").flag_name(), Some("xvf"));
    /// assert_eq!(classify("-").flag_name(), None);
    /// ```
    pub fn flag_name(&self) -> Option<&str> {
        match self {
            Self::LongFlag { name }
            | Self::LongFlagWithEqual { name, .. }
            | Self::ShortFlag { name }
            | Self::ShortFlagWithEqual { name, .. } => Some(name.as_str()),
            Self::ShortMultiFlag { cluster } => Some(cluster.as_str()),
            Self::InvalidFlag { .. } | Self::PositionalArgument { .. } => None,
        }
    }

    /// Returns the value attached with `=`, if any.
    pub fn inline_value(&self) -> Option<&str> {
        match self {
            Self::LongFlagWithEqual { value, .. } | Self::ShortFlagWithEqual { value, .. } => {
                Some(value.as_str())
            }
            _ => None,
        }
    }

    /// Splits a multi-flag cluster into one name per character.
    ///
    /// Returns `None` for every other variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use arg_token_core::classify;
    ///
    /// assert_eq!(
    ///     classify("-xvf").cluster_flags(),
    ///     Some(vec!["x".to_string(), "v".to_string(), "f".to_string()])
    /// );
    /// assert_eq!(classify("-x").cluster_flags(), None);
    /// ```
    pub fn cluster_flags(&self) -> Option<Vec<String>> {
        match self {
            Self::ShortMultiFlag { cluster } => {
                Some(cluster.chars().map(String::from).collect())
            }
            _ => None,
        }
    }
}

/// Renders the canonical token text.
///
/// For most inputs this reproduces the original token. A cluster that lost
/// an `=` suffix during classification renders without it.
impl fmt::Display for ArgToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LongFlag { name } => write!(f, "--{name}"),
            Self::LongFlagWithEqual { name, value } => write!(f, "--{name}={value}"),
            Self::ShortFlag { name } => write!(f, "-{name}"),
            Self::ShortFlagWithEqual { name, value } => write!(f, "-{name}={value}"),
            Self::ShortMultiFlag { cluster } => write!(f, "-{cluster}"),
            Self::InvalidFlag { raw } | Self::PositionalArgument { raw } => f.write_str(raw),
        }
    }
}

impl FromStr for ArgToken {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(crate::classify(s))
    }
}

impl From<&str> for ArgToken {
    fn from(s: &str) -> Self {
        crate::classify(s)
    }
}
