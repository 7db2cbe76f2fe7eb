//! Attribute datatype model
//!
//! Attributes in the input table can be typed via the datatype option so the
//! engine can order and generalize values correctly. Formats attached to
//! DECIMAL and DATE are kept as opaque strings for the engine; DATE formats
//! are additionally checked to be valid strftime specifications.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Datatype of a single attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    /// Opaque string values, the default for untyped attributes
    String,
    /// Integral values
    Integer,
    /// Decimal values with an optional format string
    Decimal { format: Option<std::string::String> },
    /// Date values with an optional strftime format string
    Date { format: Option<std::string::String> },
}

impl DataType {
    /// Checks whether the given strftime format string is well-formed
    pub fn is_valid_date_format(format: &str) -> bool {
        !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::String => write!(f, "STRING"),
            DataType::Integer => write!(f, "INTEGER"),
            DataType::Decimal { format: None } => write!(f, "DECIMAL"),
            DataType::Decimal {
                format: Some(format),
            } => write!(f, "DECIMAL({format})"),
            DataType::Date { format: None } => write!(f, "DATE"),
            DataType::Date {
                format: Some(format),
            } => write!(f, "DATE({format})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(DataType::String.to_string(), "STRING");
        assert_eq!(DataType::Integer.to_string(), "INTEGER");
        assert_eq!(
            DataType::Decimal {
                format: Some("#.##".to_string())
            }
            .to_string(),
            "DECIMAL(#.##)"
        );
        assert_eq!(
            DataType::Date {
                format: Some("%Y-%m-%d".to_string())
            }
            .to_string(),
            "DATE(%Y-%m-%d)"
        );
    }

    #[test]
    fn test_valid_date_format() {
        assert!(DataType::is_valid_date_format("%Y-%m-%d"));
        assert!(DataType::is_valid_date_format("%d.%m.%Y %H:%M"));
    }

    #[test]
    fn test_invalid_date_format() {
        assert!(!DataType::is_valid_date_format("%Q"));
    }
}
