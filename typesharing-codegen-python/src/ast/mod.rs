//! Python AST builders for generating dataclass modules.
//!
//! These provide a high-level API for constructing Python syntax,
//! which can then be rendered via CodeBuilder.

mod dataclass;
mod imports;
mod missing;

pub use dataclass::{Dataclass, DataclassField};
pub use imports::FromImport;
pub use missing::MissingTypeClass;

/// Escape text for use inside a `"""` docstring.
pub(crate) fn escape_docstring(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
