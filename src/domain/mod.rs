//! Domain models and types for Cloak.
//!
//! This module contains the validated domain objects that the parsing
//! subsystem produces from raw option strings:
//!
//! - **Privacy criteria** ([`Criterion`]) parsed from the criteria language
//! - **Attribute datatypes** ([`DataType`])
//! - **Research subset specifications** ([`SubsetSpec`])
//! - **Information-loss metrics** ([`Metric`])
//! - **Error types** ([`CloakError`], [`ParseError`]) and the [`Result`] alias
//!
//! All values here are constructed once per CLI invocation, held immutably
//! for the rest of the run, and discarded on exit. None of them reference
//! engine-side state; criteria that need a hierarchy or subset are bound
//! later at the adapter boundary.

pub mod criterion;
pub mod datatype;
pub mod errors;
pub mod metric;
pub mod result;
pub mod subset;

pub use criterion::Criterion;
pub use datatype::DataType;
pub use errors::{CloakError, ParseError};
pub use metric::Metric;
pub use result::Result;
pub use subset::SubsetSpec;
