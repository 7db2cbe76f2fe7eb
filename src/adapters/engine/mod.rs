//! Anonymization-engine boundary
//!
//! The anonymization search itself is an external collaborator; this module
//! holds its interface surface: loaded generalization hierarchies, the
//! materialized research subset, and the engine-native privacy criteria
//! that the adapter produces from validated domain values.

pub mod criteria;
pub mod hierarchy;
pub mod subset;

pub use criteria::{bind_criteria, PrivacyCriterion};
pub use hierarchy::Hierarchy;
pub use subset::DataSubset;

use crate::domain::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Loads every hierarchy referenced by the hierarchy option.
///
/// `separator` is the resolved data separator used by the hierarchy files.
pub fn load_hierarchies(
    specs: &HashMap<String, PathBuf>,
    separator: char,
) -> Result<HashMap<String, Hierarchy>> {
    let mut hierarchies = HashMap::with_capacity(specs.len());
    for (attribute, path) in specs {
        let hierarchy = Hierarchy::load(path, separator)?;
        tracing::debug!(
            attribute = %attribute,
            rows = hierarchy.rows().len(),
            levels = hierarchy.levels(),
            "loaded hierarchy"
        );
        hierarchies.insert(attribute.clone(), hierarchy);
    }
    Ok(hierarchies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_hierarchies() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "34;30-39;*\n45;40-49;*\n").unwrap();

        let mut specs = HashMap::new();
        specs.insert("age".to_string(), file.path().to_path_buf());

        let hierarchies = load_hierarchies(&specs, ';').unwrap();
        assert_eq!(hierarchies.len(), 1);
        assert_eq!(hierarchies["age"].levels(), 3);
    }

    #[test]
    fn test_load_hierarchies_propagates_missing_file() {
        let mut specs = HashMap::new();
        specs.insert("age".to_string(), PathBuf::from("/nonexistent/age.csv"));
        assert!(load_hierarchies(&specs, ';').is_err());
    }
}
