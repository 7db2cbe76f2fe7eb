//! Escaped-separator tokenizer
//!
//! Every option string in the criteria language is a flat list of fields
//! delimited by a single separator character. A backslash immediately before
//! the separator escapes it: the backslash is consumed and the separator is
//! kept literally in the field. Only this one escape is recognized; the
//! backslash cannot be escaped itself.
//!
//! The scan is an explicit two-state loop (normal, escaped) instead of a
//! lookbehind regex, so the behavior is portable and testable on its own.

/// Splits `input` into fields on every unescaped occurrence of `separator`.
///
/// Escape markers are removed from the output fields. An empty input yields
/// an empty sequence, and trailing empty fields produced by a trailing
/// unescaped separator are dropped.
///
/// # Examples
///
/// ```
/// use cloak::core::tokenizer::split_escaped;
///
/// assert_eq!(split_escaped("a,b", ','), vec!["a", "b"]);
/// assert_eq!(split_escaped("a\\,b,c", ','), vec!["a,b", "c"]);
/// assert!(split_escaped("", ',').is_empty());
/// ```
pub fn split_escaped(input: &str, separator: char) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut fields = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in input.chars() {
        if escaped {
            // A backslash only escapes the separator; before any other
            // character it is an ordinary literal.
            if c != separator {
                current.push('\\');
            }
            current.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == separator {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    if escaped {
        current.push('\\');
    }
    fields.push(current);

    // Trailing empty fields are not significant.
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Escapes every literal occurrence of `separator` in `input` with a
/// backslash, the inverse of the unescaping performed by [`split_escaped`].
pub fn escape(input: &str, separator: char) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c == separator {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Removes the escape marker before every occurrence of `separator`.
///
/// For all strings `s`, `unescape(&escape(s, sep), sep) == s`.
pub fn unescape(input: &str, separator: char) -> String {
    let mut out = String::with_capacity(input.len());
    let mut escaped = false;
    for c in input.chars() {
        if escaped {
            if c != separator {
                out.push('\\');
            }
            out.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else {
            out.push(c);
        }
    }
    if escaped {
        out.push('\\');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(split_escaped("a,b,c", ','), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_escaped("", ',').is_empty());
    }

    #[test]
    fn test_split_single_field() {
        assert_eq!(split_escaped("abc", ','), vec!["abc"]);
    }

    #[test]
    fn test_split_escaped_separator_kept_literally() {
        assert_eq!(split_escaped("a\\,b,c", ','), vec!["a,b", "c"]);
    }

    #[test]
    fn test_split_backslash_before_other_char_is_literal() {
        assert_eq!(split_escaped("a\\b,c", ','), vec!["a\\b", "c"]);
    }

    #[test]
    fn test_split_trailing_backslash_is_literal() {
        assert_eq!(split_escaped("a\\", ','), vec!["a\\"]);
    }

    #[test]
    fn test_split_drops_trailing_empty_fields() {
        assert_eq!(split_escaped("a,b,", ','), vec!["a", "b"]);
        assert_eq!(split_escaped("a,,", ','), vec!["a"]);
    }

    #[test]
    fn test_split_keeps_inner_empty_fields() {
        assert_eq!(split_escaped("a,,b", ','), vec!["a", "", "b"]);
    }

    #[test]
    fn test_escape_inserts_backslash() {
        assert_eq!(escape("a,b", ','), "a\\,b");
        assert_eq!(escape("abc", ','), "abc");
        assert_eq!(escape("", ','), "");
    }

    #[test]
    fn test_escape_unescape_identity() {
        for s in ["", "plain", "a,b,c", "x\\y", "trailing,"] {
            assert_eq!(unescape(&escape(s, ','), ','), s);
        }
    }

    #[test]
    fn test_escape_then_split_round_trip() {
        let fields = ["alpha", "with,comma", "with=equals", "plain"];
        let joined = fields
            .iter()
            .map(|f| escape(f, ','))
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(split_escaped(&joined, ','), fields);
    }

    #[test]
    fn test_split_with_tab_separator() {
        assert_eq!(split_escaped("a\tb\\\tc", '\t'), vec!["a", "b\tc"]);
    }
}
