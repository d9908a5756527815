//! Scanning helpers shared by the long- and short-flag sub-parsers.
//!
//! Only three operations are needed on a flag body: "does `=` occur",
//! "split on the first `=`" and "take everything before the first `=`".

/// Delimiter between a flag name and its inline value.
pub const EQUAL: char = '=';

/// Returns `true` if `s` contains an inline-value delimiter.
///
/// # Examples
///
/// ```
/// use arg_token_core::has_equal;
///
/// assert!(has_equal("name=value"));
/// assert!(has_equal("="));
/// assert!(!has_equal("name"));
/// ```
pub fn has_equal(s: &str) -> bool {
    s.contains(EQUAL)
}

/// Splits `s` on its first `=`.
///
/// The part after the delimiter is returned verbatim, so any further `=`
/// characters belong to the value. Returns `None` when `s` has no `=`.
///
/// # Examples
///
/// ```
/// use arg_token_core::split_on_equal;
///
/// assert_eq!(split_on_equal("key=a=b"), Some(("key", "a=b")));
/// assert_eq!(split_on_equal("key="), Some(("key", "")));
/// assert_eq!(split_on_equal("key"), None);
/// ```
pub fn split_on_equal(s: &str) -> Option<(&str, &str)> {
    s.split_once(EQUAL)
}

/// Returns the cluster a short-flag body would bundle, if it looks like one.
///
/// Only the part before the first `=` is inspected (the whole body when
/// there is none). When that part is longer than one character it is
/// returned as the cluster, and anything from the `=` onward is dropped.
///
/// # Examples
///
/// ```
/// use arg_token_core::multi_flag_candidate;
///
/// assert_eq!(multi_flag_candidate("abc"), Some("abc"));
/// assert_eq!(multi_flag_candidate("ab=c"), Some("ab"));
/// assert_eq!(multi_flag_candidate("a=bc"), None);
/// assert_eq!(multi_flag_candidate("a"), None);
/// ```
pub fn multi_flag_candidate(s: &str) -> Option<&str> {
    let head = match split_on_equal(s) {
        Some((head, _)) => head,
        None => s,
    };
    (char_len(head) > 1).then_some(head)
}

/// Character count, capped at two.
///
/// Callers only ever distinguish 0, 1 and "more than one".
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().take(2).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_trailing_equals_in_value() {
        assert_eq!(split_on_equal("a==b"), Some(("a", "=b")));
        assert_eq!(split_on_equal("=x"), Some(("", "x")));
        assert_eq!(split_on_equal("="), Some(("", "")));
    }

    #[test]
    fn test_multi_flag_candidate_counts_chars_not_bytes() {
        assert_eq!(multi_flag_candidate("é"), None);
        assert_eq!(multi_flag_candidate("éü"), Some("éü"));
        assert_eq!(multi_flag_candidate("é=ü"), None);
    }

    #[test]
    fn test_multi_flag_candidate_empty_head() {
        assert_eq!(multi_flag_candidate(""), None);
        assert_eq!(multi_flag_candidate("=abc"), None);
    }

    #[test]
    fn test_char_len_saturates() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("x"), 1);
        assert_eq!(char_len("xy"), 2);
        assert_eq!(char_len("xyz"), 2);
    }
}
