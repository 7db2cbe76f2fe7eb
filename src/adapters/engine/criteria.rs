//! Criteria-to-engine adapter
//!
//! Binds parsed, source-agnostic [`Criterion`] values against the resolved
//! hierarchies and research subset, producing the engine's native criterion
//! representation. Cross-reference checks live here and nowhere else: a
//! hierarchical t-closeness criterion without its hierarchy, or a
//! d-presence/inclusion criterion without a subset, fails the whole run.

use super::hierarchy::Hierarchy;
use super::subset::DataSubset;
use crate::domain::{Criterion, ParseError, Result};
use std::collections::HashMap;

/// Engine-native privacy criterion with all references resolved
#[derive(Debug, Clone, PartialEq)]
pub enum PrivacyCriterion {
    KAnonymity {
        k: u32,
    },
    DPresence {
        d_min: f64,
        d_max: f64,
        subset: DataSubset,
    },
    Inclusion {
        subset: DataSubset,
    },
    DistinctLDiversity {
        attribute: String,
        l: u32,
    },
    EntropyLDiversity {
        attribute: String,
        l: f64,
    },
    RecursiveCLDiversity {
        attribute: String,
        c: f64,
        l: u32,
    },
    HierarchicalDistanceTCloseness {
        attribute: String,
        t: f64,
        hierarchy: Hierarchy,
    },
    EqualDistanceTCloseness {
        attribute: String,
        t: f64,
    },
}

/// Translates every parsed criterion 1:1 into its engine representation.
///
/// No anonymization logic happens here; this is a pure binding step.
pub fn bind_criteria(
    criteria: &[Criterion],
    hierarchies: &HashMap<String, Hierarchy>,
    subset: Option<&DataSubset>,
) -> Result<Vec<PrivacyCriterion>> {
    let mut bound = Vec::with_capacity(criteria.len());

    for criterion in criteria {
        let require_subset = || -> Result<DataSubset> {
            subset.cloned().ok_or_else(|| ParseError::MissingSubset.into())
        };

        bound.push(match criterion {
            Criterion::KAnonymity { k } => PrivacyCriterion::KAnonymity { k: *k },
            Criterion::DPresence { d_min, d_max } => PrivacyCriterion::DPresence {
                d_min: *d_min,
                d_max: *d_max,
                subset: require_subset()?,
            },
            Criterion::Inclusion => PrivacyCriterion::Inclusion {
                subset: require_subset()?,
            },
            Criterion::DistinctLDiversity { attribute, l } => {
                PrivacyCriterion::DistinctLDiversity {
                    attribute: attribute.clone(),
                    l: *l,
                }
            }
            Criterion::EntropyLDiversity { attribute, l } => {
                PrivacyCriterion::EntropyLDiversity {
                    attribute: attribute.clone(),
                    l: *l,
                }
            }
            Criterion::RecursiveLDiversity { attribute, c, l } => {
                PrivacyCriterion::RecursiveCLDiversity {
                    attribute: attribute.clone(),
                    c: *c,
                    l: *l,
                }
            }
            Criterion::HierarchicalTCloseness { attribute, t } => {
                let hierarchy = hierarchies
                    .get(attribute)
                    .ok_or_else(|| ParseError::MissingHierarchy(attribute.clone()))?;
                PrivacyCriterion::HierarchicalDistanceTCloseness {
                    attribute: attribute.clone(),
                    t: *t,
                    hierarchy: hierarchy.clone(),
                }
            }
            Criterion::EqualTCloseness { attribute, t } => {
                PrivacyCriterion::EqualDistanceTCloseness {
                    attribute: attribute.clone(),
                    t: *t,
                }
            }
        });
    }

    tracing::debug!(count = bound.len(), "bound criteria to engine representation");
    Ok(bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CloakError;

    fn subset() -> DataSubset {
        DataSubset::Selector("age > 30".to_string())
    }

    #[test]
    fn test_bind_k_anonymity_needs_nothing() {
        let bound = bind_criteria(&[Criterion::KAnonymity { k: 5 }], &HashMap::new(), None)
            .unwrap();
        assert_eq!(bound, vec![PrivacyCriterion::KAnonymity { k: 5 }]);
    }

    #[test]
    fn test_bind_d_presence_without_subset_fails() {
        let err = bind_criteria(
            &[Criterion::DPresence {
                d_min: 0.1,
                d_max: 0.9,
            }],
            &HashMap::new(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CloakError::Parse(ParseError::MissingSubset)));
    }

    #[test]
    fn test_bind_inclusion_with_subset() {
        let bound =
            bind_criteria(&[Criterion::Inclusion], &HashMap::new(), Some(&subset())).unwrap();
        assert_eq!(
            bound,
            vec![PrivacyCriterion::Inclusion { subset: subset() }]
        );
    }

    #[test]
    fn test_bind_hierarchical_without_hierarchy_fails() {
        let err = bind_criteria(
            &[Criterion::HierarchicalTCloseness {
                attribute: "zip".to_string(),
                t: 0.5,
            }],
            &HashMap::new(),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CloakError::Parse(ParseError::MissingHierarchy(attribute)) if attribute == "zip"
        ));
    }

    #[test]
    fn test_bind_preserves_order() {
        let criteria = [
            Criterion::KAnonymity { k: 2 },
            Criterion::EqualTCloseness {
                attribute: "zip".to_string(),
                t: 0.2,
            },
            Criterion::RecursiveLDiversity {
                attribute: "disease".to_string(),
                c: 3.0,
                l: 2,
            },
        ];
        let bound = bind_criteria(&criteria, &HashMap::new(), None).unwrap();
        assert!(matches!(bound[0], PrivacyCriterion::KAnonymity { k: 2 }));
        assert!(matches!(
            bound[1],
            PrivacyCriterion::EqualDistanceTCloseness { .. }
        ));
        assert!(matches!(
            bound[2],
            PrivacyCriterion::RecursiveCLDiversity { .. }
        ));
    }
}
