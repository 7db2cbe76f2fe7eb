//! External integrations
//!
//! Only one external collaborator exists: the anonymization engine. Its
//! boundary types and the criteria adapter live in [`engine`].

pub mod engine;
