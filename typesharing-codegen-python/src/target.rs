//! Python default expressions.

use typesharing_codegen::{NamingConvention, TargetLanguage, TypeMapper};
use typesharing_core::parse_iso_date;
use typesharing_ir::{DefaultValue, ScalarType, TypeRef};

use crate::{naming::PY_NAMING, type_mapper::PythonTypeMapper};

/// The Python dataclass target.
pub struct PythonTarget;

impl TargetLanguage for PythonTarget {
    fn type_mapper(&self) -> &dyn TypeMapper {
        &PythonTypeMapper
    }

    fn naming(&self) -> &NamingConvention {
        &PY_NAMING
    }

    /// Lists are mutable, so list defaults go through `default_factory`.
    fn render_default(&self, value: &DefaultValue, ty: &TypeRef) -> String {
        match value {
            DefaultValue::List(items) if items.is_empty() => {
                "field(default_factory=list)".to_string()
            }
            DefaultValue::List(_) => {
                format!("field(default_factory=lambda: {})", literal(value, ty))
            }
            _ => literal(value, ty),
        }
    }

    fn null_default(&self) -> &'static str {
        "None"
    }

    fn absent_default(&self) -> &'static str {
        "MissingType()"
    }
}

/// Render a literal as a Python expression of type `ty`.
fn literal(value: &DefaultValue, ty: &TypeRef) -> String {
    match value {
        DefaultValue::Null => "None".to_string(),
        DefaultValue::Boolean(true) => "True".to_string(),
        DefaultValue::Boolean(false) => "False".to_string(),
        DefaultValue::List(items) => {
            let element = ty.element().unwrap_or(ty);
            let items: Vec<String> = items.iter().map(|item| literal(item, element)).collect();
            format!("[{}]", items.join(", "))
        }
        DefaultValue::String(s) => match ty.leaf_scalar() {
            Some(ScalarType::Decimal) => decimal(s),
            Some(ScalarType::Date) => match parse_iso_date(s) {
                Some((year, month, day)) => format!("date({}, {}, {})", year, month, day),
                None => string(s),
            },
            _ => string(s),
        },
        DefaultValue::Integer(i) => match ty.leaf_scalar() {
            Some(ScalarType::Decimal) => decimal(&i.to_string()),
            _ => i.to_string(),
        },
        DefaultValue::Float(x) => match ty.leaf_scalar() {
            Some(ScalarType::Decimal) => decimal(&x.to_string()),
            _ => format!("{:?}", x),
        },
    }
}

fn decimal(digits: &str) -> String {
    format!("Decimal(\"{}\")", digits)
}

/// JSON string escapes are valid Python string escapes.
fn string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}
