//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `tool` - Tool catalog entity, identifiers, and validation rules

pub mod tool;
