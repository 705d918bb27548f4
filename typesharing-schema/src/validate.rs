//! Schema rules: document shape, names, type references, presence markers
//! and default literals.
//!
//! Objects are checked in document order and fields in document order within
//! each object. Within one field the order is: name, collision, type, extant,
//! default. The first violation is returned and no partial IR is built.

use indexmap::IndexMap;
use tracing::debug;
use typesharing_core::{
    is_decimal_literal, is_identifier, parse_iso_date, python_field_name, to_camel_case,
};
use typesharing_ir::{
    DefaultValue, Extant, Field, ObjectType, Presence, ScalarType, SchemaIR, TypeRef,
};

use crate::{Node, ValidationError};

/// Names an object type may not take: scalars, the names every generated
/// module defines or imports, and reserved words of both targets.
const RESERVED_TYPE_NAMES: &[&str] = &[
    // schema language
    "Boolean", "Date", "Decimal", "Integer", "List", "MissingType", "Null", "String",
    // python keywords
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
    // python names used by generated modules
    "Optional", "Union", "annotations", "bool", "dataclass", "date", "field", "int", "list",
    "str",
    // typescript type names
    "any", "bigint", "boolean", "never", "null", "number", "object", "string", "symbol",
    "undefined", "unknown", "void",
    // javascript reserved words
    "case", "catch", "const", "debugger", "default", "delete", "do", "enum", "export",
    "extends", "false", "function", "implements", "instanceof", "interface", "let", "new",
    "package", "private", "protected", "public", "static", "super", "switch", "this",
    "throw", "true", "typeof", "var",
];

/// Validate a parsed schema document and build its IR.
pub fn validate(document: &Node) -> Result<SchemaIR, ValidationError> {
    let Some(types) = document.as_mapping() else {
        return Err(ValidationError::Structure {
            reason: format!("not a mapping (found {})", document.kind()),
        });
    };
    if types.is_empty() {
        return Err(ValidationError::Structure {
            reason: "document declares no object types".to_string(),
        });
    }

    let objects = types
        .iter()
        .map(|(name, spec)| validate_object(name, spec, types))
        .collect::<Result<Vec<_>, _>>()?;

    let schema = SchemaIR::new(objects);
    debug!(
        objects = schema.len(),
        fields = schema.field_count(),
        "validated schema document"
    );
    Ok(schema)
}

fn validate_object(
    name: &str,
    spec: &Node,
    types: &IndexMap<String, Node>,
) -> Result<ObjectType, ValidationError> {
    if let Some(reason) = type_name_problem(name) {
        return Err(ValidationError::InvalidIdentifier {
            object: name.to_string(),
            field: None,
            reason: reason.to_string(),
        });
    }

    match spec.get("type") {
        Some(Node::String(kind)) if kind == "Object" => {}
        Some(kind) => {
            return Err(ValidationError::TypeKind {
                object: name.to_string(),
                found: format!("'{kind}'"),
            });
        }
        None => {
            return Err(ValidationError::TypeKind {
                object: name.to_string(),
                found: if spec.as_mapping().is_some() {
                    "no type".to_string()
                } else {
                    format!("a {}", spec.kind())
                },
            });
        }
    }

    let Some(properties) = spec
        .get("properties")
        .and_then(Node::as_mapping)
        .filter(|properties| !properties.is_empty())
    else {
        return Err(ValidationError::EmptyProperties {
            object: name.to_string(),
        });
    };

    let mut object = ObjectType::new(name);
    if let Some(description) = spec.get("description").and_then(Node::as_str) {
        object = object.description(description);
    }

    let mut seen = NameForms::default();
    for (raw_name, field_spec) in properties {
        seen.insert(name, raw_name)?;
        object = object.field(validate_field(name, raw_name, field_spec, types)?);
    }
    Ok(object)
}

fn validate_field(
    object: &str,
    raw_name: &str,
    spec: &Node,
    types: &IndexMap<String, Node>,
) -> Result<Field, ValidationError> {
    let missing_type = || ValidationError::MissingType {
        object: object.to_string(),
        field: raw_name.to_string(),
    };

    let Some(declared) = spec.get("type") else {
        return Err(missing_type());
    };
    // A plain `Null` in YAML loads as the null value.
    let ty = match declared {
        Node::Null => Ok(TypeRef::scalar(ScalarType::Null)),
        Node::String(declared) => resolve_type(declared, types),
        other => Err(other.to_string()),
    }
    .map_err(|name| ValidationError::UnknownType {
        object: object.to_string(),
        field: raw_name.to_string(),
        name,
        declared: declared.to_string(),
    })?;

    let mut field = Field::new(raw_name, ty);

    match spec.get("extant") {
        None => {}
        Some(Node::String(value)) if value == "missing" => field.extant = Extant::Missing,
        Some(value) => {
            return Err(ValidationError::InvalidExtant {
                object: object.to_string(),
                field: raw_name.to_string(),
                value: value.to_string(),
            });
        }
    }

    if let Some(value) = spec.get("default") {
        let default = default_literal(value, &field.ty, field.presence()).map_err(|reason| {
            ValidationError::InvalidDefault {
                object: object.to_string(),
                field: raw_name.to_string(),
                reason,
            }
        })?;
        field.default = Some(default);
    }

    if let Some(description) = spec.get("description").and_then(Node::as_str) {
        field.description = Some(description.to_string());
    }

    Ok(field)
}

/// Resolve a declared type string. On failure returns the offending name,
/// which for `List<...>` is the innermost element type.
pub(crate) fn resolve_type(
    declared: &str,
    types: &IndexMap<String, Node>,
) -> Result<TypeRef, String> {
    let mut inner = declared.trim();
    let mut depth = 0;
    while let Some(rest) = inner
        .strip_prefix("List<")
        .and_then(|rest| rest.strip_suffix('>'))
    {
        inner = rest.trim();
        depth += 1;
    }

    let leaf = if let Some(scalar) = ScalarType::from_name(inner) {
        TypeRef::scalar(scalar)
    } else if is_identifier(inner) && types.contains_key(inner) {
        TypeRef::named(inner)
    } else {
        return Err(inner.to_string());
    };
    Ok(TypeRef::nested_list(leaf, depth))
}

/// Returns the reason a name is not usable as an object type name.
fn type_name_problem(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("name cannot be empty")
    } else if !is_identifier(name) {
        Some("not an identifier")
    } else if RESERVED_TYPE_NAMES.contains(&name) {
        Some("name is reserved")
    } else {
        None
    }
}

/// Generated names already taken within one object.
#[derive(Debug, Default)]
struct NameForms {
    /// (form label, generated name, raw field name)
    taken: Vec<(&'static str, String, String)>,
}

impl NameForms {
    fn insert(&mut self, object: &str, raw_name: &str) -> Result<(), ValidationError> {
        let name = raw_name.strip_suffix('?').unwrap_or(raw_name);
        if !is_identifier(name) {
            return Err(ValidationError::InvalidIdentifier {
                object: object.to_string(),
                field: Some(raw_name.to_string()),
                reason: if name.is_empty() {
                    "name cannot be empty".to_string()
                } else {
                    "not an identifier".to_string()
                },
            });
        }

        let forms = [
            ("field name", name.to_string()),
            ("Python name", python_field_name(name)),
            ("TypeScript name", to_camel_case(name)),
        ];
        for (label, form) in &forms {
            if let Some((_, _, other)) = self
                .taken
                .iter()
                .find(|(taken_label, taken, _)| taken_label == label && taken == form)
            {
                return Err(ValidationError::DuplicateField {
                    object: object.to_string(),
                    field: raw_name.to_string(),
                    other: other.clone(),
                    form: format!("{label} '{form}'"),
                });
            }
        }
        self.taken.extend(
            forms
                .into_iter()
                .map(|(label, form)| (label, form, raw_name.to_string())),
        );
        Ok(())
    }
}

/// Check a default literal against the field type and presence class.
fn default_literal(
    value: &Node,
    ty: &TypeRef,
    presence: Presence,
) -> Result<DefaultValue, String> {
    if matches!(value, Node::Null) {
        return if presence.admits_null() || *ty == TypeRef::scalar(ScalarType::Null) {
            Ok(DefaultValue::Null)
        } else {
            Err(format!(
                "null is not a {ty}; mark the field nullable with a trailing `?`"
            ))
        };
    }
    literal(value, ty)
}

/// Check a non-top-level literal; list elements are never nullable.
fn literal(value: &Node, ty: &TypeRef) -> Result<DefaultValue, String> {
    match (value, ty) {
        (Node::Sequence(items), TypeRef::List(inner)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| literal(item, inner).map_err(|reason| format!("element {i}: {reason}")))
            .collect::<Result<Vec<_>, _>>()
            .map(DefaultValue::List),
        (Node::Mapping(_), _) => Err("mapping literals are not supported".to_string()),
        (_, TypeRef::List(_)) => Err(format!("expected a list for {ty}, found {}", value.kind())),
        (_, TypeRef::Named(name)) => Err(format!(
            "object type '{name}' accepts no literal default other than null"
        )),
        (_, TypeRef::Scalar(scalar)) => scalar_literal(value, *scalar),
    }
}

fn scalar_literal(value: &Node, scalar: ScalarType) -> Result<DefaultValue, String> {
    match (scalar, value) {
        (ScalarType::String, Node::String(s)) => Ok(DefaultValue::String(s.clone())),
        (ScalarType::Integer, Node::Integer(i)) => Ok(DefaultValue::Integer(*i)),
        (ScalarType::Boolean, Node::Boolean(b)) => Ok(DefaultValue::Boolean(*b)),
        (ScalarType::Null, Node::Null) => Ok(DefaultValue::Null),
        (ScalarType::Decimal, Node::Integer(i)) => Ok(DefaultValue::Integer(*i)),
        (ScalarType::Decimal, Node::Float(x)) if x.is_finite() => Ok(DefaultValue::Float(*x)),
        (ScalarType::Decimal, Node::String(s)) if is_decimal_literal(s) => {
            Ok(DefaultValue::String(s.clone()))
        }
        (ScalarType::Date, Node::String(s)) if parse_iso_date(s).is_some() => {
            Ok(DefaultValue::String(s.clone()))
        }
        (ScalarType::Decimal, _) => Err(format!(
            "expected a decimal number or decimal string, found {} '{value}'",
            value.kind()
        )),
        (ScalarType::Date, _) => Err(format!(
            "expected a YYYY-MM-DD date string, found {} '{value}'",
            value.kind()
        )),
        (scalar, _) => Err(format!(
            "expected {}, found {} '{value}'",
            expected_literal(scalar),
            value.kind()
        )),
    }
}

fn expected_literal(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::String => "a string",
        ScalarType::Integer => "an integer",
        ScalarType::Decimal => "a decimal",
        ScalarType::Boolean => "a boolean",
        ScalarType::Date => "a date",
        ScalarType::Null => "null",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn yaml(src: &str) -> Node {
        Node::from(serde_yaml::from_str::<serde_yaml::Value>(src).unwrap())
    }

    fn validate_yaml(src: &str) -> Result<SchemaIR, ValidationError> {
        validate(&yaml(src))
    }

    fn kind_of(src: &str) -> ErrorKind {
        validate_yaml(src).unwrap_err().kind()
    }

    const ORDER: &str = r#"
Item:
  type: Object
  properties:
    description:
      type: String
    amount:
      type: Integer
Entry:
  type: Object
  properties:
    email:
      type: String
    items:
      type: List<Item>
    schedule?:
      type: List<String>
    note:
      type: String
      extant: missing
"#;

    #[test]
    fn test_validate_order_document() {
        let schema = validate_yaml(ORDER).unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.objects()[0].name, "Item");
        assert_eq!(schema.objects()[0].fields.len(), 2);

        let entry = schema.get("Entry").unwrap();
        let names: Vec<&str> = entry.fields.iter().map(|f| f.raw_name.as_str()).collect();
        assert_eq!(names, ["email", "items", "schedule?", "note"]);
        assert_eq!(entry.fields[1].ty, TypeRef::list(TypeRef::named("Item")));
        assert_eq!(entry.fields[2].presence(), Presence::Nullable);
        assert_eq!(
            entry.fields[3].presence(),
            Presence::PossiblyAbsent { nullable: false }
        );
    }

    #[test]
    fn test_forward_reference() {
        let schema = validate_yaml(
            "A:\n  type: Object\n  properties:\n    b:\n      type: B\nB:\n  type: Object\n  properties:\n    x:\n      type: Null\n",
        )
        .unwrap();
        assert_eq!(schema.objects()[0].fields[0].ty, TypeRef::named("B"));
        assert_eq!(
            schema.objects()[1].fields[0].ty,
            TypeRef::scalar(ScalarType::Null)
        );
    }

    #[test]
    fn test_structure_errors() {
        assert_eq!(kind_of("- a\n- b\n"), ErrorKind::Structure);
        assert_eq!(kind_of("just text"), ErrorKind::Structure);
        assert_eq!(kind_of("{}"), ErrorKind::Structure);
        assert_eq!(validate(&Node::Null).unwrap_err().kind(), ErrorKind::Structure);
    }

    #[test]
    fn test_type_kind_errors() {
        let err = validate_yaml("A:\n  type: Enum\n  properties:\n    x:\n      type: String\n")
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeKind {
                object: "A".into(),
                found: "'Enum'".into()
            }
        );
        assert_eq!(
            kind_of("A:\n  properties:\n    x:\n      type: String\n"),
            ErrorKind::TypeKind
        );
        assert_eq!(kind_of("A: 3\n"), ErrorKind::TypeKind);
    }

    #[test]
    fn test_empty_properties_errors() {
        assert_eq!(kind_of("A:\n  type: Object\n"), ErrorKind::EmptyProperties);
        assert_eq!(
            kind_of("A:\n  type: Object\n  properties: {}\n"),
            ErrorKind::EmptyProperties
        );
        assert_eq!(
            kind_of("A:\n  type: Object\n  properties: [x]\n"),
            ErrorKind::EmptyProperties
        );
    }

    #[test]
    fn test_missing_type_errors() {
        let err = validate_yaml("A:\n  type: Object\n  properties:\n    x:\n      default: 1\n")
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingType {
                object: "A".into(),
                field: "x".into()
            }
        );
        assert_eq!(
            kind_of("A:\n  type: Object\n  properties:\n    x:\n"),
            ErrorKind::MissingType
        );
    }

    #[test]
    fn test_unknown_type_names_owner_and_type() {
        let err = validate_yaml(
            "Entry:\n  type: Object\n  properties:\n    widget:\n      type: Frobnicate\n",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownType);
        let message = err.to_string();
        assert!(message.contains("Entry"));
        assert!(message.contains("\"Frobnicate\"") || message.contains("'Frobnicate'"));
    }

    #[test]
    fn test_unknown_list_inner_type() {
        let err = validate_yaml(
            "A:\n  type: Object\n  properties:\n    x:\n      type: List<List<Float>>\n",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownType {
                object: "A".into(),
                field: "x".into(),
                name: "Float".into(),
                declared: "List<List<Float>>".into(),
            }
        );
    }

    #[test]
    fn test_unknown_type_edge_cases() {
        for declared in ["List<>", "List<String", "string", "List[String]", "3"] {
            let src = format!("A:\n  type: Object\n  properties:\n    x:\n      type: \"{declared}\"\n");
            assert_eq!(kind_of(&src), ErrorKind::UnknownType, "{declared}");
        }
    }

    #[test]
    fn test_resolve_type() {
        let types: IndexMap<String, Node> = [("Item".to_string(), Node::Null)].into_iter().collect();
        assert_eq!(
            resolve_type("Decimal", &types),
            Ok(TypeRef::scalar(ScalarType::Decimal))
        );
        assert_eq!(
            resolve_type(" List< List<Item> > ", &types),
            Ok(TypeRef::nested_list(TypeRef::named("Item"), 2))
        );
        assert_eq!(resolve_type("List<Thing>", &types), Err("Thing".to_string()));
    }

    #[test]
    fn test_resolve_deeply_nested_list() {
        let types = IndexMap::new();
        let declared = format!("{}Integer{}", "List<".repeat(500), ">".repeat(500));
        let ty = resolve_type(&declared, &types).unwrap();
        assert_eq!(ty.list_depth(), 500);
        assert_eq!(ty.leaf_scalar(), Some(ScalarType::Integer));
    }

    #[test]
    fn test_invalid_extant() {
        let err = validate_yaml(
            "A:\n  type: Object\n  properties:\n    x:\n      type: String\n      extant: maybe\n",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidExtant {
                object: "A".into(),
                field: "x".into(),
                value: "maybe".into()
            }
        );
        assert_eq!(
            kind_of("A:\n  type: Object\n  properties:\n    x:\n      type: String\n      extant: Missing\n"),
            ErrorKind::InvalidExtant
        );
    }

    #[test]
    fn test_invalid_type_names() {
        for name in ["class", "String", "List", "MissingType", "interface", "str", "2Fast", "my-type"] {
            let src = format!("\"{name}\":\n  type: Object\n  properties:\n    x:\n      type: String\n");
            assert_eq!(kind_of(&src), ErrorKind::InvalidIdentifier, "{name}");
        }
    }

    #[test]
    fn test_invalid_field_names() {
        for name in ["full-name", "x??", "?", "1st"] {
            let src = format!("A:\n  type: Object\n  properties:\n    \"{name}\":\n      type: String\n");
            assert_eq!(kind_of(&src), ErrorKind::InvalidIdentifier, "{name}");
        }
    }

    #[test]
    fn test_duplicate_fields() {
        let err = validate_yaml(
            "A:\n  type: Object\n  properties:\n    schedule:\n      type: String\n    schedule?:\n      type: String\n",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateField {
                object: "A".into(),
                field: "schedule?".into(),
                other: "schedule".into(),
                form: "field name 'schedule'".into(),
            }
        );

        let err = validate_yaml(
            "A:\n  type: Object\n  properties:\n    ticketNumber:\n      type: String\n    ticket_number:\n      type: String\n",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateField);
    }

    #[test]
    fn test_duplicate_after_python_escaping() {
        let err = validate_yaml(
            "A:\n  type: Object\n  properties:\n    Date:\n      type: String\n    date_:\n      type: Integer\n",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateField {
                object: "A".into(),
                field: "date_".into(),
                other: "Date".into(),
                form: "Python name 'date_'".into(),
            }
        );
    }

    #[test]
    fn test_null_type_unquoted_in_yaml() {
        for declared in ["Null", "\"Null\"", "~"] {
            let src = format!("A:\n  type: Object\n  properties:\n    x:\n      type: {declared}\n");
            let schema = validate_yaml(&src).unwrap();
            assert_eq!(
                schema.objects()[0].fields[0].ty,
                TypeRef::scalar(ScalarType::Null),
                "{declared}"
            );
        }
        assert_eq!(
            kind_of("A:\n  type: Object\n  properties:\n    x:\n      description: no type\n"),
            ErrorKind::MissingType
        );
    }

    #[test]
    fn test_defaults_accepted() {
        let schema = validate_yaml(
            r#"
A:
  type: Object
  properties:
    name:
      type: String
      default: anon
    count:
      type: Integer
      default: 3
    price:
      type: Decimal
      default: "1.50"
    rate:
      type: Decimal
      default: 0.5
    day:
      type: Date
      default: 2024-02-29
    tags:
      type: List<String>
      default: [a, b]
    phone?:
      type: String
      default: null
    nothing:
      type: Null
      default: null
"#,
        )
        .unwrap();
        let defaults: Vec<_> = schema.objects()[0]
            .fields
            .iter()
            .map(|f| f.default.clone().unwrap())
            .collect();
        assert_eq!(
            defaults,
            vec![
                DefaultValue::String("anon".into()),
                DefaultValue::Integer(3),
                DefaultValue::String("1.50".into()),
                DefaultValue::Float(0.5),
                DefaultValue::String("2024-02-29".into()),
                DefaultValue::List(vec![
                    DefaultValue::String("a".into()),
                    DefaultValue::String("b".into())
                ]),
                DefaultValue::Null,
                DefaultValue::Null,
            ]
        );
    }

    #[test]
    fn test_defaults_rejected() {
        let cases = [
            ("String", "null", ""),
            ("String", "3", ""),
            ("Integer", "\"3\"", ""),
            ("Integer", "1.5", ""),
            ("Decimal", "abc", ""),
            ("Date", "2023-02-29", ""),
            ("Boolean", "yes", ""),
            ("List<Integer>", "3", ""),
            ("List<Integer>", "[1, null]", "?"),
            ("Item", "{}", ""),
            ("Item", "x", ""),
        ];
        for (ty, default, marker) in cases {
            let src = format!(
                "Item:\n  type: Object\n  properties:\n    x{marker}:\n      type: {ty}\n      default: {default}\n"
            );
            assert_eq!(kind_of(&src), ErrorKind::InvalidDefault, "{ty} = {default}");
        }
    }

    #[test]
    fn test_null_default_for_possibly_absent() {
        let src = "A:\n  type: Object\n  properties:\n    x:\n      type: String\n      extant: missing\n      default: null\n";
        assert_eq!(kind_of(src), ErrorKind::InvalidDefault);

        let src = "A:\n  type: Object\n  properties:\n    x?:\n      type: String\n      extant: missing\n      default: null\n";
        assert!(validate_yaml(src).is_ok());
    }

    #[test]
    fn test_first_error_in_document_order() {
        let err = validate_yaml(
            r#"
A:
  type: Object
  properties:
    first:
      type: Nope
    second:
      extant: sometimes
B:
  type: Thing
"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownType);
        assert_eq!(err.field(), Some("first"));
    }

    #[test]
    fn test_descriptions() {
        let schema = validate_yaml(
            "A:\n  type: Object\n  description: An A.\n  properties:\n    x:\n      type: String\n      description: The x.\n",
        )
        .unwrap();
        let object = &schema.objects()[0];
        assert_eq!(object.description.as_deref(), Some("An A."));
        assert_eq!(object.fields[0].description.as_deref(), Some("The x."));
    }

    #[test]
    fn test_counts_match_input() {
        let schema = validate_yaml(ORDER).unwrap();
        assert_eq!(schema.field_count(), 6);
        for object in schema.objects() {
            let expected = yaml(ORDER)
                .get(&object.name)
                .and_then(|o| o.get("properties"))
                .and_then(Node::as_mapping)
                .map(|p| p.len());
            assert_eq!(Some(object.fields.len()), expected);
        }
    }
}
