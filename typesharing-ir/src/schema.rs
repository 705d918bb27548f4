//! Schema documents, object types and fields.

use std::collections::HashMap;

use serde::Serialize;

use crate::{DefaultValue, Extant, Presence, TypeRef};

/// Schema IR - one validated schema document.
///
/// Object types are kept in declaration order, which drives the order of
/// every generated declaration. A name index is built once at construction
/// so named type references resolve without scanning.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaIR {
    objects: Vec<ObjectType>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl SchemaIR {
    /// Build the IR from object types in declaration order.
    ///
    /// This does not check the document invariants; use
    /// `typesharing_schema::validate` to build an IR from untrusted input.
    pub fn new(objects: Vec<ObjectType>) -> Self {
        let index = objects
            .iter()
            .enumerate()
            .map(|(i, object)| (object.name.clone(), i))
            .collect();
        Self { objects, index }
    }

    /// Object types in declaration order.
    pub fn objects(&self) -> &[ObjectType] {
        &self.objects
    }

    /// Look up an object type by name.
    pub fn get(&self, name: &str) -> Option<&ObjectType> {
        self.index.get(name).map(|&i| &self.objects[i])
    }

    /// Returns true if an object type with this name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of object types.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if no object types are declared.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Total number of fields across all object types.
    pub fn field_count(&self) -> usize {
        self.objects.iter().map(|o| o.fields.len()).sum()
    }
}

/// A named record type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectType {
    /// Type name, used verbatim by every target.
    pub name: String,
    /// Description for generated doc comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// A field of an object type.
///
/// The raw name keeps its trailing `?` (the nullable marker); target naming
/// conventions are applied later by each code generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Field name as written in the schema, including any trailing `?`.
    pub raw_name: String,
    /// Field type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Literal default value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    /// Presence modifier.
    pub extant: Extant,
    /// Description for generated doc comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Field {
    pub fn new(raw_name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            raw_name: raw_name.into(),
            ty,
            default: None,
            extant: Extant::Required,
            description: None,
        }
    }

    pub fn default_value(mut self, value: DefaultValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Mark the field `extant: missing`.
    pub fn missing(mut self) -> Self {
        self.extant = Extant::Missing;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The field name with the nullable marker stripped.
    pub fn name(&self) -> &str {
        self.raw_name
            .strip_suffix('?')
            .unwrap_or(&self.raw_name)
    }

    /// Returns true if the raw name carries the nullable marker.
    pub fn is_nullable(&self) -> bool {
        self.raw_name.ends_with('?')
    }

    /// The presence class of this field.
    pub fn presence(&self) -> Presence {
        Presence::from_markers(self.is_nullable(), self.extant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarType;

    fn string() -> TypeRef {
        TypeRef::scalar(ScalarType::String)
    }

    #[test]
    fn test_field_name_strips_marker() {
        let field = Field::new("schedule?", TypeRef::list(string()));
        assert_eq!(field.name(), "schedule");
        assert!(field.is_nullable());

        let field = Field::new("email", string());
        assert_eq!(field.name(), "email");
        assert!(!field.is_nullable());
    }

    #[test]
    fn test_field_presence() {
        assert_eq!(Field::new("email", string()).presence(), Presence::Required);
        assert_eq!(Field::new("phone?", string()).presence(), Presence::Nullable);
        assert_eq!(
            Field::new("note", string()).missing().presence(),
            Presence::PossiblyAbsent { nullable: false }
        );
        assert_eq!(
            Field::new("promo?", string()).missing().presence(),
            Presence::PossiblyAbsent { nullable: true }
        );
    }

    #[test]
    fn test_schema_lookup() {
        let schema = SchemaIR::new(vec![
            ObjectType::new("Item").field(Field::new("amount", TypeRef::scalar(ScalarType::Integer))),
            ObjectType::new("Entry")
                .field(Field::new("email", string()))
                .field(Field::new("items", TypeRef::list(TypeRef::named("Item")))),
        ]);

        assert_eq!(schema.len(), 2);
        assert!(!schema.is_empty());
        assert_eq!(schema.field_count(), 3);
        assert!(schema.contains("Entry"));
        assert!(!schema.contains("Missing"));
        assert_eq!(schema.get("Entry").map(|o| o.fields.len()), Some(2));
        assert_eq!(schema.objects()[0].name, "Item");
    }

    #[test]
    fn test_serialize_ir() {
        let schema = SchemaIR::new(vec![
            ObjectType::new("Entry").field(Field::new("note", string()).missing()),
        ]);
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "objects": [{
                    "name": "Entry",
                    "fields": [{ "raw_name": "note", "type": "String", "extant": "missing" }]
                }]
            })
        );
    }
}
