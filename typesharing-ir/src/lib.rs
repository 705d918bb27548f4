//! Schema intermediate representation for typesharing.
//!
//! This crate defines the validated, in-memory model of one schema document:
//! named object types, their fields, and the type references and presence
//! markers attached to each field.
//!
//! # Architecture
//!
//! ```text
//! schema.yaml → typesharing-schema (validation) → typesharing-ir → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Target-agnostic (no Python/TypeScript-specific concerns)
//! - Serialization-agnostic (built from YAML, JSON or TOML alike)
//! - Unnormalized (raw field names and presence markers are kept intact)

mod presence;
mod schema;
mod types;
mod value;

pub use presence::{Extant, Presence};
pub use schema::{Field, ObjectType, SchemaIR};
pub use types::{ScalarType, TypeRef};
pub use value::DefaultValue;
