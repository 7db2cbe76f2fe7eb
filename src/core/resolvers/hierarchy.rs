//! Hierarchy option resolver
//!
//! The hierarchy option is a separator-delimited list of
//! `attribute=filename` pairs. This resolver only validates the pairing and
//! builds the attribute-to-path map; reading the referenced hierarchy files
//! happens at the engine boundary, after the data separator is known.

use crate::core::tokenizer::split_escaped;
use crate::core::SEPARATOR_KEY_VALUE;
use crate::domain::ParseError;
use std::collections::HashMap;
use std::path::PathBuf;

/// Parses the hierarchy option into an attribute-to-file map.
///
/// Duplicate attribute names are allowed; the last occurrence wins. A token
/// that does not split into exactly `attribute=filename` fails with
/// [`ParseError::MalformedHierarchySpec`].
pub fn parse_hierarchy_specs(
    input: &str,
    separator: char,
) -> Result<HashMap<String, PathBuf>, ParseError> {
    let mut hierarchies = HashMap::new();
    for token in split_escaped(input, separator) {
        let pair = split_escaped(&token, SEPARATOR_KEY_VALUE);
        if pair.len() != 2 {
            return Err(ParseError::MalformedHierarchySpec(token));
        }
        hierarchies.insert(pair[0].clone(), PathBuf::from(&pair[1]));
    }
    Ok(hierarchies)
}
