//! Literal default values.

use serde::Serialize;

/// A literal default value from a field definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
    List(Vec<DefaultValue>),
}

impl DefaultValue {
    /// Returns true if this is the null literal.
    pub fn is_null(&self) -> bool {
        matches!(self, DefaultValue::Null)
    }

    /// Get a short description of the literal kind for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DefaultValue::String(_) => "string",
            DefaultValue::Integer(_) => "integer",
            DefaultValue::Float(_) => "float",
            DefaultValue::Boolean(_) => "boolean",
            DefaultValue::Null => "null",
            DefaultValue::List(_) => "list",
        }
    }
}
