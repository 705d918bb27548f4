//! Schema document parsing and validation for typesharing.
//!
//! A schema document maps object type names to definitions:
//!
//! ```yaml
//! Entry:
//!   type: Object
//!   properties:
//!     email:
//!       type: String
//!     schedule?:          # trailing `?`: always present, may be null
//!       type: List<String>
//!     note:
//!       type: String
//!       extant: missing   # may be absent from the object
//! ```
//!
//! Documents may be written in YAML, JSON or TOML. Each is lowered into a
//! [`Node`] tree and checked by [`validate`], which yields a
//! [`SchemaIR`](typesharing_ir::SchemaIR) or the first rule violation.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod format;
mod node;
mod validate;

pub use error::{Error, ErrorKind, Result, SourceContext, ValidationError};
pub use file::SchemaFile;
pub use format::{SourceFormat, SyntaxError};
pub use node::Node;
use tracing::debug;
use typesharing_ir::SchemaIR;
pub use validate::validate;

/// Parse and validate schema source text.
pub fn parse_str(content: &str, format: SourceFormat) -> Result<SchemaIR> {
    let filename = match format {
        SourceFormat::Yaml => "schema.yaml",
        SourceFormat::Json => "schema.json",
        SourceFormat::Toml => "schema.toml",
    };
    parse_str_with_filename(content, format, filename)
}

/// Parse and validate schema source text, naming `filename` in diagnostics.
pub fn parse_str_with_filename(
    content: &str,
    format: SourceFormat,
    filename: &str,
) -> Result<SchemaIR> {
    let ctx = SourceContext::new(content, filename);
    let document = format
        .parse(content)
        .map_err(|e| ctx.parse_error(format, e))?;
    let schema = validate(&document).map_err(|e| ctx.validation_error(e))?;
    debug!(filename, %format, objects = schema.len(), "parsed schema");
    Ok(schema)
}

/// Open, parse and validate a schema file.
pub fn parse_file(path: impl AsRef<std::path::Path>) -> Result<SchemaIR> {
    SchemaFile::open(path).map(SchemaFile::into_schema)
}
