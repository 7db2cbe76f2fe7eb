//! Source-agnostic privacy criterion model
//!
//! A [`Criterion`] is a validated, self-contained value parsed from one token
//! of the criteria option string. Criteria that reference a generalization
//! hierarchy or a research subset stay unresolved here; binding happens at
//! the engine adapter boundary.
//!
//! Every variant round-trips: rendering it with `Display` and re-parsing the
//! canonical text yields an equal value.

use crate::core::tokenizer;
use crate::core::{SEPARATOR_KEY_VALUE, SEPARATOR_OPTION};
use std::fmt;

/// A single anonymization constraint from the criteria language
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// `<k>-ANONYMITY`
    KAnonymity { k: u32 },

    /// `(<dmin>,<dmax>)-PRESENCE`
    ///
    /// `d_min <= d_max` is not enforced here; bound validation is the
    /// engine's responsibility.
    DPresence { d_min: f64, d_max: f64 },

    /// literal `INCLUSION`
    Inclusion,

    /// `<attr>=DISTINCT-(<l>)-DIVERSITY`
    DistinctLDiversity { attribute: String, l: u32 },

    /// `<attr>=ENTROPY-(<l>)-DIVERSITY`
    EntropyLDiversity { attribute: String, l: f64 },

    /// `<attr>=RECURSIVE-(<c>,<l>)-DIVERSITY`
    RecursiveLDiversity { attribute: String, c: f64, l: u32 },

    /// `<attr>=HIERARCHICAL-(<t>)-CLOSENESS`
    HierarchicalTCloseness { attribute: String, t: f64 },

    /// `<attr>=EQUALDISTANCE-(<t>)-CLOSENESS`
    EqualTCloseness { attribute: String, t: f64 },
}

impl Criterion {
    /// Short human-readable name of the criterion kind
    pub fn kind(&self) -> &'static str {
        match self {
            Criterion::KAnonymity { .. } => "k-anonymity",
            Criterion::DPresence { .. } => "d-presence",
            Criterion::Inclusion => "inclusion",
            Criterion::DistinctLDiversity { .. } => "distinct-l-diversity",
            Criterion::EntropyLDiversity { .. } => "entropy-l-diversity",
            Criterion::RecursiveLDiversity { .. } => "recursive-l-diversity",
            Criterion::HierarchicalTCloseness { .. } => "hierarchical-t-closeness",
            Criterion::EqualTCloseness { .. } => "equal-distance-t-closeness",
        }
    }

    /// The sensitive attribute this criterion applies to, if any
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Criterion::DistinctLDiversity { attribute, .. }
            | Criterion::EntropyLDiversity { attribute, .. }
            | Criterion::RecursiveLDiversity { attribute, .. }
            | Criterion::HierarchicalTCloseness { attribute, .. }
            | Criterion::EqualTCloseness { attribute, .. } => Some(attribute),
            _ => None,
        }
    }

    /// Whether binding this criterion requires a generalization hierarchy
    pub fn requires_hierarchy(&self) -> bool {
        matches!(self, Criterion::HierarchicalTCloseness { .. })
    }

    /// Whether binding this criterion requires a research subset
    pub fn requires_subset(&self) -> bool {
        matches!(self, Criterion::DPresence { .. } | Criterion::Inclusion)
    }
}

impl fmt::Display for Criterion {
    /// Renders the canonical text form understood by the criteria grammars
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Attribute names are escaped so that a literal '=' or ',' in an
        // attribute survives the render/parse round trip, including when
        // renderings are joined into a criteria list.
        let attr = |a: &str| {
            tokenizer::escape(&tokenizer::escape(a, SEPARATOR_KEY_VALUE), SEPARATOR_OPTION)
        };
        match self {
            Criterion::KAnonymity { k } => write!(f, "{k}-ANONYMITY"),
            Criterion::DPresence { d_min, d_max } => {
                write!(f, "({d_min},{d_max})-PRESENCE")
            }
            Criterion::Inclusion => write!(f, "INCLUSION"),
            Criterion::DistinctLDiversity { attribute, l } => {
                write!(f, "{}=DISTINCT-({l})-DIVERSITY", attr(attribute))
            }
            Criterion::EntropyLDiversity { attribute, l } => {
                write!(f, "{}=ENTROPY-({l})-DIVERSITY", attr(attribute))
            }
            Criterion::RecursiveLDiversity { attribute, c, l } => {
                write!(f, "{}=RECURSIVE-({c},{l})-DIVERSITY", attr(attribute))
            }
            Criterion::HierarchicalTCloseness { attribute, t } => {
                write!(f, "{}=HIERARCHICAL-({t})-CLOSENESS", attr(attribute))
            }
            Criterion::EqualTCloseness { attribute, t } => {
                write!(f, "{}=EQUALDISTANCE-({t})-CLOSENESS", attr(attribute))
            }
        }
    }
}
