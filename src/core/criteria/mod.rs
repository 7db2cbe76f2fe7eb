//! Criteria dispatcher
//!
//! Turns the flat criteria option string into a list of [`Criterion`]
//! values. The string is optionally wrapped in `[...]`, tokenized on the
//! given separator (escapable), and every token must be recognized by
//! exactly one grammar from the registry.
//!
//! Criterion arguments may contain the separator inside their parentheses,
//! as in `(0.1,0.9)-PRESENCE`. The language allows only one parenthesis
//! level, so fields split apart inside an open parenthesis are rejoined
//! before dispatch; no escaping is needed there.
//!
//! Output order follows token order, so a given input always produces the
//! same sequence; the engine treats the criteria as an unordered set of
//! constraints.

pub mod grammar;

pub use grammar::GrammarRegistry;

use crate::core::tokenizer::split_escaped;
use crate::domain::{CloakError, Criterion, ParseError, Result};

/// Parses a whole criteria option string.
///
/// Fails with [`ParseError::UnparseableCriterion`] when a token matches no
/// grammar. More than one match cannot occur with the shipped grammars; if
/// it does, it is reported as an internal error instead of silently picking
/// one interpretation.
///
/// # Examples
///
/// ```
/// use cloak::core::criteria::parse_criteria;
/// use cloak::domain::Criterion;
///
/// let criteria = parse_criteria("[5-ANONYMITY, age=DISTINCT-(2)-DIVERSITY]", ',').unwrap();
/// assert_eq!(criteria[0], Criterion::KAnonymity { k: 5 });
/// assert_eq!(criteria.len(), 2);
/// ```
pub fn parse_criteria(input: &str, separator: char) -> Result<Vec<Criterion>> {
    let registry = GrammarRegistry::new()?;
    parse_criteria_with(&registry, input, separator)
}

/// Like [`parse_criteria`], reusing an already-compiled grammar registry.
pub fn parse_criteria_with(
    registry: &GrammarRegistry,
    input: &str,
    separator: char,
) -> Result<Vec<Criterion>> {
    // Strip the optional enclosing brackets, then surrounding whitespace.
    let mut cleaned = input.trim();
    cleaned = cleaned.strip_prefix('[').unwrap_or(cleaned);
    cleaned = cleaned.strip_suffix(']').unwrap_or(cleaned);
    cleaned = cleaned.trim();

    let tokens = coalesce_parenthesized(split_escaped(cleaned, separator), separator);

    let mut criteria = Vec::new();
    for (index, token) in tokens.iter().enumerate() {
        let token = token.trim();
        let mut matches = registry.matches(token);
        match matches.len() {
            0 => {
                return Err(ParseError::UnparseableCriterion {
                    index,
                    token: token.to_string(),
                }
                .into())
            }
            1 => criteria.push(matches.remove(0).1),
            _ => {
                let kinds: Vec<&str> = matches.iter().map(|(kind, _)| *kind).collect();
                return Err(CloakError::Internal(format!(
                    "criterion {index} matched more than one grammar ({}): [{token}]",
                    kinds.join(", ")
                )));
            }
        }
    }

    tracing::debug!(count = criteria.len(), "parsed criteria");
    Ok(criteria)
}

/// Rejoins fields that the tokenizer split inside an open parenthesis.
///
/// A field leaving more parentheses open than closed pulls the following
/// fields (separator re-inserted) into the same token until the count is
/// balanced again. A stray closing parenthesis never carries over.
fn coalesce_parenthesized(fields: Vec<String>, separator: char) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::with_capacity(fields.len());
    let mut depth: i32 = 0;

    for field in fields {
        let opened = field.chars().filter(|&c| c == '(').count() as i32;
        let closed = field.chars().filter(|&c| c == ')').count() as i32;

        match tokens.last_mut() {
            Some(last) if depth > 0 => {
                last.push(separator);
                last.push_str(&field);
            }
            _ => tokens.push(field),
        }
        depth = (depth + opened - closed).max(0);
    }
    tokens
}
