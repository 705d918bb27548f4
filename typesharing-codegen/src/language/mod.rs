//! Language-specific abstractions.
//!
//! This module provides traits and types for per-target code generation:
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`TargetLanguage`] - Everything the field transformer needs from a target
//! - [`TypeMapper`] - Trait for mapping schema types to language types
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, TargetLanguage, TypeMapper};
