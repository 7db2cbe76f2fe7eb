// Cloak - data anonymization front end
// Copyright (c) 2025 Cloak Contributors
// Licensed under the MIT License

//! # Cloak - data anonymization front end
//!
//! Cloak is the command-line front end for a lattice-based data-anonymization
//! engine. It turns flat option strings into validated, typed configuration:
//! privacy criteria (k-anonymity, d-presence, l-diversity variants,
//! t-closeness variants, inclusion), generalization hierarchies, attribute
//! datatypes, and research subsets. The anonymization search itself is an
//! external collaborator consumed through the engine boundary.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The parsing subsystem (tokenizer, criteria grammars,
//!   dispatcher, resolvers, separator detection)
//! - [`adapters`] - The engine boundary (hierarchies, subsets, criterion
//!   binding)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## The criteria language
//!
//! Criteria are written as one flat, separator-delimited string, optionally
//! wrapped in `[...]`, case-insensitive:
//!
//! ```text
//! [5-ANONYMITY,(0.1,0.9)-PRESENCE,age=DISTINCT-(2)-DIVERSITY,zip=HIERARCHICAL-(0.5)-CLOSENESS]
//! ```
//!
//! A separator inside a token is escaped with a backslash. Every token must
//! be recognized by exactly one criterion grammar:
//!
//! ```
//! use cloak::core::criteria::parse_criteria;
//! use cloak::domain::Criterion;
//!
//! let criteria = parse_criteria("5-ANONYMITY,age=DISTINCT-(2)-DIVERSITY", ',').unwrap();
//! assert_eq!(criteria[0], Criterion::KAnonymity { k: 5 });
//! ```
//!
//! ## Binding
//!
//! Criteria referencing a hierarchy or a research subset parse as
//! self-contained values; binding against resolver output happens in one
//! place, at the engine adapter:
//!
//! ```no_run
//! use cloak::adapters::engine::{bind_criteria, load_hierarchies};
//! use cloak::core::criteria::parse_criteria;
//! use cloak::core::resolvers::parse_hierarchy_specs;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let criteria = parse_criteria("zip=HIERARCHICAL-(0.5)-CLOSENESS", ',')?;
//! let specs = parse_hierarchy_specs("zip=hierarchies/zip.csv", ',')?;
//! let hierarchies = load_hierarchies(&specs, ';')?;
//! let bound = bind_criteria(&criteria, &hierarchies, None)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! All failures surface as [`domain::CloakError`]; parse failures carry the
//! offending token index and text:
//!
//! ```
//! use cloak::core::criteria::parse_criteria;
//!
//! let err = parse_criteria("not-a-criterion", ',').unwrap_err();
//! assert!(err.to_string().contains("not-a-criterion"));
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
