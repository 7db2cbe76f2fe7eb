//! Field-separator resolution
//!
//! The separator option is either a single literal character or the keyword
//! `DETECT`, which infers the separator from the input file with a counting
//! heuristic: scan up to the first 100 lines and pick the candidate with the
//! most occurrences. Ties favor the earlier candidate in the fixed priority
//! list, and a file without any candidate falls back to `;`.

use crate::domain::{CloakError, ParseError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Candidate separators in tie-break priority order
pub const CANDIDATE_SEPARATORS: [char; 4] = [';', ',', '|', '\t'];

/// Number of lines the detection heuristic scans at most
const DETECT_MAX_LINES: usize = 100;

/// Resolves the separator option.
///
/// `input` is only consulted for `DETECT`; detection without an input file
/// is a configuration error because there is nothing to scan.
pub fn parse_separator_option(option: &str, input: Option<&Path>) -> Result<char> {
    let mut chars = option.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ if option.eq_ignore_ascii_case("DETECT") => match input {
            Some(path) => detect_separator(path),
            None => Err(CloakError::Configuration(
                "separator detection requires an input file".to_string(),
            )),
        },
        _ => Err(ParseError::InvalidSeparator(option.to_string()).into()),
    }
}

/// Infers the field separator of a delimiter-separated file.
pub fn detect_separator(path: &Path) -> Result<char> {
    let reader = BufReader::new(File::open(path)?);
    let mut counts = [0usize; CANDIDATE_SEPARATORS.len()];

    for line in reader.lines().take(DETECT_MAX_LINES) {
        for c in line?.chars() {
            if let Some(i) = CANDIDATE_SEPARATORS.iter().position(|&s| s == c) {
                counts[i] += 1;
            }
        }
    }

    // Strictly-greater comparison keeps the earlier candidate on ties and
    // yields ';' when nothing occurred at all.
    let mut selection = 0;
    for (i, &count) in counts.iter().enumerate() {
        if count > counts[selection] {
            selection = i;
        }
    }

    let separator = CANDIDATE_SEPARATORS[selection];
    tracing::debug!(separator = %separator.escape_debug(), "detected field separator");
    Ok(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_single_character_option() {
        assert_eq!(parse_separator_option(";", None).unwrap(), ';');
        assert_eq!(parse_separator_option("\t", None).unwrap(), '\t');
    }

    #[test]
    fn test_invalid_option() {
        let err = parse_separator_option("ab", None).unwrap_err();
        assert!(matches!(
            err,
            CloakError::Parse(ParseError::InvalidSeparator(_))
        ));
        assert!(parse_separator_option("", None).is_err());
    }

    #[test]
    fn test_detect_requires_input_file() {
        let err = parse_separator_option("DETECT", None).unwrap_err();
        assert!(matches!(err, CloakError::Configuration(_)));
    }

    #[test]
    fn test_detect_prefers_most_frequent() {
        let file = file_with("a,b,c;d\na,b,c\na,b\n");
        assert_eq!(detect_separator(file.path()).unwrap(), ',');
    }

    #[test]
    fn test_detect_keyword_is_case_insensitive() {
        let file = file_with("a|b|c\n");
        assert_eq!(
            parse_separator_option("detect", Some(file.path())).unwrap(),
            '|'
        );
    }

    #[test]
    fn test_detect_defaults_to_semicolon() {
        let file = file_with("plain text without separators\n");
        assert_eq!(detect_separator(file.path()).unwrap(), ';');
    }

    #[test]
    fn test_detect_tie_favors_priority_order() {
        // Equal counts of ';' and ',' resolve to ';'.
        let file = file_with("a;b,c\n");
        assert_eq!(detect_separator(file.path()).unwrap(), ';');
    }

    #[test]
    fn test_detect_scans_at_most_100_lines() {
        // Two semicolons up front, commas only after line 100.
        let mut content = String::from("a;b;c\n");
        for _ in 0..99 {
            content.push_str("plain\n");
        }
        for _ in 0..50 {
            content.push_str("x,y,z\n");
        }
        let file = file_with(&content);
        assert_eq!(detect_separator(file.path()).unwrap(), ';');
    }

    #[test]
    fn test_detect_tab_separator() {
        let file = file_with("a\tb\tc\na\tb\tc\n");
        assert_eq!(detect_separator(file.path()).unwrap(), '\t');
    }

    #[test]
    fn test_detect_missing_file_is_io_error() {
        let err = detect_separator(Path::new("/nonexistent/data.csv")).unwrap_err();
        assert!(matches!(err, CloakError::Io(_)));
    }
}
