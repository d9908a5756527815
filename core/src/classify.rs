//! Token classification.
//!
//! Dispatches on the dash prefix of a raw token, then hands the flag body to
//! the long- or short-flag sub-parser. Every input maps to some
//! [`ArgToken`]; malformed input is tagged rather than rejected.

use tracing::trace;

use crate::scan::{char_len, multi_flag_candidate, split_on_equal};
use crate::token::ArgToken;

/// Classifies one raw command-line token.
///
/// Classification is total, pure and independent of any other token.
///
/// # Examples
///
/// ```
/// use arg_token_core::{ArgToken, classify};
///
/// assert_eq!(classify("--verbose"), ArgToken::LongFlag { name: "verbose".into() });
/// assert_eq!(
///     classify("-o=out.txt"),
///     ArgToken::ShortFlagWithEqual { name: "o".into(), value: "out.txt".into() }
/// );
/// assert_eq!(classify("-xvf"), ArgToken::ShortMultiFlag { cluster: "xvf".into() });
/// assert_eq!(classify("---"), ArgToken::InvalidFlag { raw: "---".into() });
/// assert_eq!(classify("src"), ArgToken::PositionalArgument { raw: "src".into() });
/// ```
pub fn classify(token: &str) -> ArgToken {
    let classified = if token.starts_with("---") {
        ArgToken::InvalidFlag {
            raw: token.to_string(),
        }
    } else if let Some(body) = token.strip_prefix("--") {
        parse_long_flag(body)
    } else if let Some(body) = token.strip_prefix('-') {
        parse_short_flag(token, body)
    } else {
        ArgToken::PositionalArgument {
            raw: token.to_string(),
        }
    };

    trace!(token, kind = %classified.kind(), "Classified argument token");
    classified
}

/// Classifies every token of `tokens` independently, preserving order.
///
/// # Examples
///
/// ```
/// use arg_token_core::{TokenKind, classify_all};
///
/// let kinds: Vec<TokenKind> = classify_all(["-v", "--out", "a.txt"])
///     .iter()
///     .map(|t| t.kind())
///     .collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::ShortFlag, TokenKind::LongFlag, TokenKind::PositionalArgument]
/// );
/// ```
pub fn classify_all<I, S>(tokens: I) -> Vec<ArgToken>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens.into_iter().map(|t| classify(t.as_ref())).collect()
}

/// `body` is everything after `--`.
fn parse_long_flag(body: &str) -> ArgToken {
    match split_on_equal(body) {
        Some((name, value)) => ArgToken::LongFlagWithEqual {
            name: name.to_string(),
            value: value.to_string(),
        },
        None => ArgToken::LongFlag {
            name: body.to_string(),
        },
    }
}

/// `body` is everything after the single `-` of `token`.
fn parse_short_flag(token: &str, body: &str) -> ArgToken {
    match char_len(body) {
        0 => ArgToken::InvalidFlag {
            raw: token.to_string(),
        },
        1 => ArgToken::ShortFlag {
            name: body.to_string(),
        },
        _ => {
            // `-ab=c` lands here as the cluster "ab"; the `=c` suffix is dropped.
            if let Some(cluster) = multi_flag_candidate(body) {
                return ArgToken::ShortMultiFlag {
                    cluster: cluster.to_string(),
                };
            }
            match split_on_equal(body) {
                Some((name, value)) => ArgToken::ShortFlagWithEqual {
                    name: name.to_string(),
                    value: value.to_string(),
                },
                None => ArgToken::ShortFlag {
                    name: body.to_string(),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long(name: &str) -> ArgToken {
        ArgToken::LongFlag { name: name.into() }
    }

    fn long_eq(name: &str, value: &str) -> ArgToken {
        ArgToken::LongFlagWithEqual {
            name: name.into(),
            value: value.into(),
        }
    }

    fn short(name: &str) -> ArgToken {
        ArgToken::ShortFlag { name: name.into() }
    }

    fn short_eq(name: &str, value: &str) -> ArgToken {
        ArgToken::ShortFlagWithEqual {
            name: name.into(),
            value: value.into(),
        }
    }

    fn multi(cluster: &str) -> ArgToken {
        ArgToken::ShortMultiFlag {
            cluster: cluster.into(),
        }
    }

    fn invalid(raw: &str) -> ArgToken {
        ArgToken::InvalidFlag { raw: raw.into() }
    }

    fn positional(raw: &str) -> ArgToken {
        ArgToken::PositionalArgument { raw: raw.into() }
    }

    #[test]
    fn test_triple_dash_is_invalid() {
        assert_eq!(classify("---"), invalid("---"));
        assert_eq!(classify("---verbose"), invalid("---verbose"));
        assert_eq!(classify("----x=1"), invalid("----x=1"));
    }

    #[test]
    fn test_long_flags() {
        assert_eq!(classify("--verbose"), long("verbose"));
        assert_eq!(classify("--dry-run"), long("dry-run"));
        assert_eq!(classify("--"), long(""));
    }

    #[test]
    fn test_long_flag_with_equal_splits_on_first() {
        assert_eq!(classify("--out=a.txt"), long_eq("out", "a.txt"));
        assert_eq!(classify("--define=k=v"), long_eq("define", "k=v"));
        assert_eq!(classify("--empty="), long_eq("empty", ""));
        assert_eq!(classify("--=value"), long_eq("", "value"));
        assert_eq!(classify("--="), long_eq("", ""));
    }

    #[test]
    fn test_bare_dash_is_invalid() {
        assert_eq!(classify("-"), invalid("-"));
    }

    #[test]
    fn test_single_short_flag() {
        assert_eq!(classify("-x"), short("x"));
        assert_eq!(classify("-="), short("="));
        assert_eq!(classify("-é"), short("é"));
    }

    #[test]
    fn test_short_flag_with_equal() {
        assert_eq!(classify("-x=y"), short_eq("x", "y"));
        assert_eq!(classify("-x="), short_eq("x", ""));
        assert_eq!(classify("-x=a=b"), short_eq("x", "a=b"));
        assert_eq!(classify("-=y"), short_eq("", "y"));
    }

    #[test]
    fn test_short_multi_flag() {
        assert_eq!(classify("-abc"), multi("abc"));
        assert_eq!(classify("-xv"), multi("xv"));
        assert_eq!(classify("-äö"), multi("äö"));
    }

    #[test]
    fn test_cluster_before_equal_drops_value() {
        // Pinned: the suffix after `=` is discarded, not parsed as a value.
        assert_eq!(classify("-ab=c"), multi("ab"));
        assert_eq!(classify("-abc=d=e"), multi("abc"));
        assert_eq!(classify("-ab="), multi("ab"));
    }

    #[test]
    fn test_positional_arguments() {
        assert_eq!(classify(""), positional(""));
        assert_eq!(classify("file.txt"), positional("file.txt"));
        assert_eq!(classify("a-b"), positional("a-b"));
        assert_eq!(classify(" -x"), positional(" -x"));
        assert_eq!(classify("key=value"), positional("key=value"));
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let tokens = classify_all(vec![
            String::from("-xvf"),
            String::from("archive.tar"),
            String::from("--level=9"),
        ]);
        assert_eq!(
            tokens,
            vec![multi("xvf"), positional("archive.tar"), long_eq("level", "9")]
        );
    }

    #[test]
    fn test_classify_all_empty() {
        assert!(classify_all(Vec::<&str>::new()).is_empty());
    }
}
