//! Research subset specification
//!
//! A run can reference at most one research subset, identified either by a
//! secondary dataset file or by a query expression against the primary
//! dataset. The specification is parsed here; materializing the subset is an
//! engine-boundary concern.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// How the research subset is supplied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "kind", content = "value")]
pub enum SubsetSpec {
    /// `FILE=<path>`: a secondary dataset holding the subset rows
    File(PathBuf),
    /// `QUERY=<expression>`: a selector evaluated against the primary dataset
    Query(String),
}

impl fmt::Display for SubsetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubsetSpec::File(path) => write!(f, "FILE={}", path.display()),
            SubsetSpec::Query(query) => write!(f, "QUERY={query}"),
        }
    }
}
