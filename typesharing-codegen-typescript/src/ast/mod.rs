//! TypeScript AST builders for generating interface declarations.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod interface;

pub use interface::{Interface, InterfaceField};

/// Escape text for use inside a `/** ... */` comment.
pub(crate) fn escape_jsdoc(text: &str) -> String {
    text.replace("*/", "*\\/")
}
