//! Core parsing subsystem
//!
//! Everything in this module is synchronous and free of shared mutable
//! state: each function is a pure mapping from its string input (plus the
//! files it is told to read) to validated domain objects or a structured
//! error. Malformed input fails fast; nothing is recovered automatically.

pub mod criteria;
pub mod resolvers;
pub mod separator;
pub mod tokenizer;

/// Field separator used inside option strings (criteria, hierarchies,
/// datatypes, attribute lists). Escapable via backslash.
pub const SEPARATOR_OPTION: char = ',';

/// Separator between an attribute name and its value in key=value tokens.
pub const SEPARATOR_KEY_VALUE: char = '=';
