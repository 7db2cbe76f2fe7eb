//! Engine-side research subset
//!
//! Materializes a [`SubsetSpec`] into the form the engine consumes: rows of
//! a secondary dataset for `FILE`, or the opaque selector expression for
//! `QUERY` (evaluating the query against the primary dataset is the
//! engine's job).

use crate::domain::{CloakError, Result, SubsetSpec};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// A research subset in engine-native form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSubset {
    /// Rows of the secondary dataset, header included
    Rows(Vec<Vec<String>>),
    /// Selector expression evaluated by the engine
    Selector(String),
}

impl DataSubset {
    /// Materializes a parsed subset specification.
    ///
    /// File subsets are read with the resolved data separator; query subsets
    /// carry their expression through unchanged.
    pub fn from_spec(spec: &SubsetSpec, separator: char) -> Result<Self> {
        match spec {
            SubsetSpec::File(path) => {
                let reader = BufReader::new(File::open(path).map_err(|e| {
                    CloakError::Io(format!("failed to read subset {}: {e}", path.display()))
                })?);
                let mut rows = Vec::new();
                for line in reader.lines() {
                    let line = line?;
                    if line.is_empty() {
                        continue;
                    }
                    rows.push(line.split(separator).map(str::to_string).collect());
                }
                Ok(DataSubset::Rows(rows))
            }
            SubsetSpec::Query(query) => Ok(DataSubset::Selector(query.clone())),
        }
    }

    /// Short description for run-plan reporting
    pub fn describe(&self) -> String {
        match self {
            DataSubset::Rows(rows) => format!("{} rows", rows.len()),
            DataSubset::Selector(query) => format!("query: {query}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_file_spec() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "age;zip\n34;81667\n45;81668\n").unwrap();

        let spec = SubsetSpec::File(file.path().to_path_buf());
        let subset = DataSubset::from_spec(&spec, ';').unwrap();
        match subset {
            DataSubset::Rows(rows) => {
                assert_eq!(rows.len(), 3);
                assert_eq!(rows[1], vec!["34", "81667"]);
            }
            other => panic!("unexpected subset: {other:?}"),
        }
    }

    #[test]
    fn test_from_query_spec() {
        let spec = SubsetSpec::Query("age > 30".to_string());
        let subset = DataSubset::from_spec(&spec, ';').unwrap();
        assert_eq!(subset, DataSubset::Selector("age > 30".to_string()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let spec = SubsetSpec::File(PathBuf::from("/nonexistent/subset.csv"));
        let err = DataSubset::from_spec(&spec, ';').unwrap_err();
        assert!(matches!(err, CloakError::Io(_)));
    }
}
