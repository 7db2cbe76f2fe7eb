//! Datatype option resolver
//!
//! The datatype option is a separator-delimited list of `attribute=type`
//! pairs where the type is `STRING`, `INTEGER`, `DECIMAL[(format)]` or
//! `DATE[(format)]`, case-insensitive.

use crate::core::tokenizer::split_escaped;
use crate::core::SEPARATOR_KEY_VALUE;
use crate::domain::{CloakError, DataType, ParseError, Result};
use regex::Regex;
use std::collections::HashMap;

/// Parses the datatype option into an attribute-to-datatype map.
///
/// Duplicate attribute names are allowed; the last occurrence wins.
pub fn parse_datatypes(input: &str, separator: char) -> Result<HashMap<String, DataType>> {
    // <TYPENAME>[(format)]
    let shape = Regex::new(r"^(\w+)(?:\((.*)\))?$")
        .map_err(|e| CloakError::Internal(format!("invalid datatype pattern: {e}")))?;

    let mut datatypes = HashMap::new();
    for token in split_escaped(input, separator) {
        let pair = split_escaped(&token, SEPARATOR_KEY_VALUE);
        if pair.len() != 2 {
            return Err(ParseError::MalformedDataTypeSpec(token).into());
        }
        let caps = shape
            .captures(pair[1].trim())
            .ok_or_else(|| ParseError::MalformedDataTypeSpec(token.clone()))?;
        let name = caps[1].to_uppercase();
        let format = caps.get(2).map(|m| m.as_str().to_string());

        let datatype = match name.as_str() {
            "STRING" => DataType::String,
            "INTEGER" => DataType::Integer,
            "DECIMAL" => DataType::Decimal { format },
            "DATE" => {
                if let Some(ref format) = format {
                    if !DataType::is_valid_date_format(format) {
                        return Err(CloakError::Configuration(format!(
                            "invalid date format for attribute {}: {format}",
                            pair[0]
                        )));
                    }
                }
                DataType::Date { format }
            }
            _ => return Err(ParseError::UnknownDataType(name).into()),
        };
        datatypes.insert(pair[0].clone(), datatype);
    }
    Ok(datatypes)
}
