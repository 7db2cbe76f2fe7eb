//! Domain error types
//!
//! This module defines the error hierarchy for Cloak. All errors are
//! domain-specific and don't expose third-party types. Parse failures carry
//! enough context (token index and text) to render a precise message.

use thiserror::Error;

/// Main Cloak error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum CloakError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Option-string parse errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal consistency failures that indicate a bug, not bad input
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors produced while parsing option strings into domain objects
///
/// All of these are fail-fast: a single CLI invocation parses its options
/// exactly once and surfaces the first failure.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// A criteria token matched no grammar
    #[error("criterion {index} could not be parsed: [{token}]")]
    UnparseableCriterion { index: usize, token: String },

    /// A hierarchy token did not split into attribute=filename
    #[error("hierarchy specification is malformed: [{0}]")]
    MalformedHierarchySpec(String),

    /// A datatype token did not split into attribute=type
    #[error("datatype specification is malformed: [{0}]")]
    MalformedDataTypeSpec(String),

    /// The subset option did not have the shape tag=payload
    #[error("subset specification is malformed: [{0}]")]
    MalformedSubsetSpec(String),

    /// A datatype token had a recognizable shape but an unknown type name
    #[error("datatype not recognized: {0}")]
    UnknownDataType(String),

    /// A subset specification used a tag other than FILE or QUERY
    #[error("subset specification not recognized: {0}")]
    UnknownSubsetKind(String),

    /// A criterion referenced a hierarchy that was never supplied
    #[error("a hierarchy has to be defined for attribute: {0}")]
    MissingHierarchy(String),

    /// A criterion referenced a research subset that was never supplied
    #[error("a research subset has to be defined")]
    MissingSubset,

    /// The separator option was neither a single character nor DETECT
    #[error("only a single character or the keyword 'DETECT' is allowed, got: {0}")]
    InvalidSeparator(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for CloakError {
    fn from(err: std::io::Error) -> Self {
        CloakError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CloakError {
    fn from(err: toml::de::Error) -> Self {
        CloakError::Configuration(format!("TOML parse error: {err}"))
    }
}
