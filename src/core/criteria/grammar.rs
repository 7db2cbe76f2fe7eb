//! Per-criterion grammars
//!
//! Each criterion kind is recognized by one fixed, case-insensitive pattern.
//! The registry is an ordered list of (kind, scope, pattern, constructor)
//! entries evaluated uniformly, so adding a criterion kind means adding one
//! entry here and one `Criterion` variant, nothing else.
//!
//! Grammars that carry an attribute name (`<attr>=<body>`) first split the
//! token on the key/value separator and only attempt their pattern against
//! the value half; the others match the whole token. The patterns are
//! mutually exclusive by construction, which the dispatcher relies on.

use crate::core::tokenizer::split_escaped;
use crate::core::SEPARATOR_KEY_VALUE;
use crate::domain::{CloakError, Criterion, Result};
use regex::{Captures, Regex};

/// Which part of a token a grammar applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchScope {
    /// The pattern is matched against the whole token
    WholeToken,
    /// The token must be `attribute=value`; the pattern is matched against
    /// the value half
    AttributeValue,
}

/// A single compiled criterion grammar
struct CriterionGrammar {
    kind: &'static str,
    scope: MatchScope,
    pattern: Regex,
    build: fn(Option<&str>, &Captures) -> Option<Criterion>,
}

/// Ordered registry of all criterion grammars
pub struct GrammarRegistry {
    grammars: Vec<CriterionGrammar>,
}

impl GrammarRegistry {
    /// Compiles all criterion grammars.
    ///
    /// The patterns are fixed, so a compilation failure indicates a bug
    /// rather than bad user input.
    pub fn new() -> Result<Self> {
        let entries: [(
            &'static str,
            MatchScope,
            &'static str,
            fn(Option<&str>, &Captures) -> Option<Criterion>,
        ); 8] = [
            (
                "k-anonymity",
                MatchScope::WholeToken,
                r"(?i)^(\d+)-ANONYMITY$",
                build_k_anonymity,
            ),
            (
                "d-presence",
                MatchScope::WholeToken,
                r"(?i)^\(([^,]*),([^)]*)\)-PRESENCE$",
                build_d_presence,
            ),
            (
                "inclusion",
                MatchScope::WholeToken,
                r"(?i)^INCLUSION$",
                build_inclusion,
            ),
            (
                "distinct-l-diversity",
                MatchScope::AttributeValue,
                r"(?i)^DISTINCT-\((\d+)\)-DIVERSITY$",
                build_distinct_l_diversity,
            ),
            (
                "entropy-l-diversity",
                MatchScope::AttributeValue,
                r"(?i)^ENTROPY-\(([^)]*)\)-DIVERSITY$",
                build_entropy_l_diversity,
            ),
            (
                "recursive-l-diversity",
                MatchScope::AttributeValue,
                r"(?i)^RECURSIVE-\(([^,]*),([^)]*)\)-DIVERSITY$",
                build_recursive_l_diversity,
            ),
            (
                "hierarchical-t-closeness",
                MatchScope::AttributeValue,
                r"(?i)^HIERARCHICAL-\(([^)]*)\)-CLOSENESS$",
                build_hierarchical_t_closeness,
            ),
            (
                "equal-distance-t-closeness",
                MatchScope::AttributeValue,
                r"(?i)^EQUALDISTANCE-\(([^)]*)\)-CLOSENESS$",
                build_equal_t_closeness,
            ),
        ];

        let mut grammars = Vec::with_capacity(entries.len());
        for (kind, scope, pattern, build) in entries {
            let pattern = Regex::new(pattern).map_err(|e| {
                CloakError::Internal(format!("invalid grammar pattern for {kind}: {e}"))
            })?;
            grammars.push(CriterionGrammar {
                kind,
                scope,
                pattern,
                build,
            });
        }
        Ok(Self { grammars })
    }

    /// Runs every grammar against the token and collects all matches.
    ///
    /// The dispatcher requires exactly one element in the result; returning
    /// all matches keeps the ambiguity check in one place.
    pub fn matches(&self, token: &str) -> Vec<(&'static str, Criterion)> {
        let key_value = split_escaped(token, SEPARATOR_KEY_VALUE);
        let mut found = Vec::new();

        for grammar in &self.grammars {
            let (attribute, target) = match grammar.scope {
                MatchScope::WholeToken => (None, token),
                MatchScope::AttributeValue => {
                    // Tokens without exactly one unescaped key/value
                    // separator cannot carry an attribute grammar.
                    if key_value.len() != 2 {
                        continue;
                    }
                    (Some(key_value[0].as_str()), key_value[1].as_str())
                }
            };
            if let Some(caps) = grammar.pattern.captures(target) {
                if let Some(criterion) = (grammar.build)(attribute, &caps) {
                    found.push((grammar.kind, criterion));
                }
            }
        }
        found
    }
}

fn parse_int(caps: &Captures, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().trim().parse().ok()
}

fn parse_float(caps: &Captures, group: usize) -> Option<f64> {
    caps.get(group)?.as_str().trim().parse().ok()
}

fn build_k_anonymity(_: Option<&str>, caps: &Captures) -> Option<Criterion> {
    Some(Criterion::KAnonymity {
        k: parse_int(caps, 1)?,
    })
}

fn build_d_presence(_: Option<&str>, caps: &Captures) -> Option<Criterion> {
    Some(Criterion::DPresence {
        d_min: parse_float(caps, 1)?,
        d_max: parse_float(caps, 2)?,
    })
}

fn build_inclusion(_: Option<&str>, _: &Captures) -> Option<Criterion> {
    Some(Criterion::Inclusion)
}

fn build_distinct_l_diversity(attribute: Option<&str>, caps: &Captures) -> Option<Criterion> {
    Some(Criterion::DistinctLDiversity {
        attribute: attribute?.to_string(),
        l: parse_int(caps, 1)?,
    })
}

fn build_entropy_l_diversity(attribute: Option<&str>, caps: &Captures) -> Option<Criterion> {
    Some(Criterion::EntropyLDiversity {
        attribute: attribute?.to_string(),
        l: parse_float(caps, 1)?,
    })
}

fn build_recursive_l_diversity(attribute: Option<&str>, caps: &Captures) -> Option<Criterion> {
    Some(Criterion::RecursiveLDiversity {
        attribute: attribute?.to_string(),
        c: parse_float(caps, 1)?,
        l: parse_int(caps, 2)?,
    })
}

fn build_hierarchical_t_closeness(attribute: Option<&str>, caps: &Captures) -> Option<Criterion> {
    Some(Criterion::HierarchicalTCloseness {
        attribute: attribute?.to_string(),
        t: parse_float(caps, 1)?,
    })
}

fn build_equal_t_closeness(attribute: Option<&str>, caps: &Captures) -> Option<Criterion> {
    Some(Criterion::EqualTCloseness {
        attribute: attribute?.to_string(),
        t: parse_float(caps, 1)?,
    })
}
