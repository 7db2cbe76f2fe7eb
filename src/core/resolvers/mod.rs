//! Option-string resolvers
//!
//! These turn the hierarchy, datatype and research-subset option strings
//! into typed maps and specifications, sharing the escaped-separator
//! tokenizer with the criteria dispatcher.

pub mod datatype;
pub mod hierarchy;
pub mod subset;

pub use datatype::parse_datatypes;
pub use hierarchy::parse_hierarchy_specs;
pub use subset::parse_subset_spec;

use crate::core::tokenizer::split_escaped;

/// Parses a separator-delimited attribute list, trimming each entry.
///
/// Used for the quasi-identifying, sensitive, insensitive and identifying
/// attribute options.
pub fn parse_attribute_list(input: &str, separator: char) -> Vec<String> {
    split_escaped(input, separator)
        .into_iter()
        .map(|attribute| attribute.trim().to_string())
        .filter(|attribute| !attribute.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SEPARATOR_OPTION;

    #[test]
    fn test_attribute_list() {
        assert_eq!(
            parse_attribute_list("age, zip ,diagnosis", SEPARATOR_OPTION),
            vec!["age", "zip", "diagnosis"]
        );
    }

    #[test]
    fn test_attribute_list_empty() {
        assert!(parse_attribute_list("", SEPARATOR_OPTION).is_empty());
    }

    #[test]
    fn test_attribute_list_with_escaped_separator() {
        assert_eq!(
            parse_attribute_list("last\\,first,zip", SEPARATOR_OPTION),
            vec!["last,first", "zip"]
        );
    }
}
