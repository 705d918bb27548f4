//! TypeScript default expressions.
//!
//! Interfaces cannot carry values, so explicit defaults are rendered for the
//! `@default` JSDoc tag only.

use typesharing_codegen::{NamingConvention, TargetLanguage, TypeMapper};
use typesharing_ir::{DefaultValue, ScalarType, TypeRef};

use crate::{naming::TS_NAMING, type_mapper::TypeScriptTypeMapper};

/// The TypeScript interface target.
pub struct TypeScriptTarget;

impl TargetLanguage for TypeScriptTarget {
    fn type_mapper(&self) -> &dyn TypeMapper {
        &TypeScriptTypeMapper
    }

    fn naming(&self) -> &NamingConvention {
        &TS_NAMING
    }

    fn render_default(&self, value: &DefaultValue, ty: &TypeRef) -> String {
        match value {
            DefaultValue::Null => "null".to_string(),
            DefaultValue::Boolean(b) => b.to_string(),
            DefaultValue::String(s) => string(s),
            DefaultValue::List(items) => {
                let element = ty.element().unwrap_or(ty);
                let items: Vec<String> = items
                    .iter()
                    .map(|item| self.render_default(item, element))
                    .collect();
                format!("[{}]", items.join(", "))
            }
            // Decimal maps to `string`, so numeric decimal literals are quoted
            DefaultValue::Integer(i) if ty.leaf_scalar() == Some(ScalarType::Decimal) => {
                string(&i.to_string())
            }
            DefaultValue::Float(x) if ty.leaf_scalar() == Some(ScalarType::Decimal) => {
                string(&x.to_string())
            }
            DefaultValue::Integer(i) => i.to_string(),
            DefaultValue::Float(x) => x.to_string(),
        }
    }

    fn null_default(&self) -> &'static str {
        "null"
    }

    fn absent_default(&self) -> &'static str {
        "undefined"
    }
}

fn string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_defaults() {
        let target = TypeScriptTarget;
        let string_ty = TypeRef::scalar(ScalarType::String);
        assert_eq!(
            target.render_default(&DefaultValue::String("a\"b".into()), &string_ty),
            r#""a\"b""#
        );
        assert_eq!(
            target.render_default(&DefaultValue::Integer(7), &TypeRef::scalar(ScalarType::Integer)),
            "7"
        );
        assert_eq!(
            target.render_default(&DefaultValue::Boolean(true), &TypeRef::scalar(ScalarType::Boolean)),
            "true"
        );
        assert_eq!(target.render_default(&DefaultValue::Null, &string_ty), "null");
    }

    #[test]
    fn test_decimal_and_date_defaults_are_strings() {
        let target = TypeScriptTarget;
        let decimal = TypeRef::scalar(ScalarType::Decimal);
        assert_eq!(target.render_default(&DefaultValue::Integer(2), &decimal), "\"2\"");
        assert_eq!(target.render_default(&DefaultValue::Float(1.5), &decimal), "\"1.5\"");
        assert_eq!(
            target.render_default(&DefaultValue::String("1.50".into()), &decimal),
            "\"1.50\""
        );
        assert_eq!(
            target.render_default(
                &DefaultValue::String("2024-01-31".into()),
                &TypeRef::scalar(ScalarType::Date)
            ),
            "\"2024-01-31\""
        );
    }

    #[test]
    fn test_list_defaults() {
        let ty = TypeRef::nested_list(TypeRef::scalar(ScalarType::Decimal), 2);
        let value = DefaultValue::List(vec![
            DefaultValue::List(vec![DefaultValue::Integer(1)]),
            DefaultValue::List(vec![]),
        ]);
        assert_eq!(TypeScriptTarget.render_default(&value, &ty), "[[\"1\"], []]");
    }

    #[test]
    fn test_implicit_defaults() {
        assert_eq!(TypeScriptTarget.null_default(), "null");
        assert_eq!(TypeScriptTarget.absent_default(), "undefined");
    }
}
