//! Generalization hierarchy handle
//!
//! A hierarchy file is a delimiter-separated table: one row per raw value,
//! columns from the raw value to successively coarser generalizations. The
//! engine consumes the loaded rows opaquely; this type only owns them
//! between loading and adapter binding.

use crate::domain::{CloakError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// An externally supplied generalization hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy {
    rows: Vec<Vec<String>>,
}

impl Hierarchy {
    /// Loads a hierarchy from a delimiter-separated file.
    ///
    /// The separator is the resolved data separator of the run, not the
    /// option separator of the criteria language.
    pub fn load(path: &Path, separator: char) -> Result<Self> {
        let reader = BufReader::new(File::open(path).map_err(|e| {
            CloakError::Io(format!("failed to read hierarchy {}: {e}", path.display()))
        })?);

        let mut rows: Vec<Vec<String>> = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            rows.push(line.split(separator).map(str::to_string).collect());
        }

        if rows.is_empty() {
            return Err(CloakError::Configuration(format!(
                "hierarchy file is empty: {}",
                path.display()
            )));
        }

        let width = rows[0].len();
        if rows.iter().any(|row: &Vec<String>| row.len() != width) {
            tracing::warn!(
                path = %path.display(),
                "hierarchy rows have inconsistent generalization levels"
            );
        }

        Ok(Self { rows })
    }

    /// All hierarchy rows, raw value first
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of generalization levels (columns of the first row)
    pub fn levels(&self) -> usize {
        self.rows[0].len()
    }
}
