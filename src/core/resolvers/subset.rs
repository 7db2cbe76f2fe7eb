//! Research subset option resolver
//!
//! At most one subset specification exists per run, shaped `FILE=<path>` or
//! `QUERY=<expression>`. The tag is case-insensitive; the payload is kept
//! verbatim.

use crate::domain::{CloakError, ParseError, Result, SubsetSpec};
use regex::Regex;
use std::path::PathBuf;

/// Parses the subset option string.
pub fn parse_subset_spec(input: &str) -> Result<SubsetSpec> {
    let shape = Regex::new(r"^(\w+)=(.*)$")
        .map_err(|e| CloakError::Internal(format!("invalid subset pattern: {e}")))?;
    let caps = shape
        .captures(input.trim())
        .ok_or_else(|| ParseError::MalformedSubsetSpec(input.to_string()))?;

    let tag = caps[1].to_uppercase();
    let payload = caps[2].to_string();
    match tag.as_str() {
        "FILE" => Ok(SubsetSpec::File(PathBuf::from(payload))),
        "QUERY" => Ok(SubsetSpec::Query(payload)),
        _ => Err(ParseError::UnknownSubsetKind(tag).into()),
    }
}
