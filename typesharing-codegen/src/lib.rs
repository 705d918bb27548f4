//! Shared code generation utilities for typesharing.
//!
//! This crate holds everything the per-target generators have in common
//! (e.g., `typesharing-codegen-python`, `typesharing-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Per-target contracts (LanguageCodegen, TypeMapper, TargetLanguage, etc.)
//! - [`transform`] - The field transformer shared by all targets
//! - [`generation`] - Output helpers (ImportCollector)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod generation;
pub mod language;
pub mod transform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used items at the crate root
pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use generation::ImportCollector;
pub use language::{
    GenerateResult, LanguageCodegen, NamingConvention, PreviewFile, TargetLanguage, TypeMapper,
};
pub use transform::{
    DefaultSource, FieldDefault, TransformedField, TransformedObject, transform_field,
    transform_object, transform_schema,
};
