//! The field transformer.
//!
//! Turns IR fields into target-ready descriptions: the target field name, the
//! presence-augmented type expression, and the default expression. Field
//! order is settled here, once, for every target: fields without a default
//! come first and fields with one follow, each group in declaration order.
//! Emitters render fields in the order they receive them.

use typesharing_ir::{Field, ObjectType, Presence, SchemaIR};

use crate::language::TargetLanguage;

/// Where a field's default expression comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultSource {
    /// A literal `default` in the schema
    Explicit,
    /// The absent sentinel of a possibly-absent field
    Absent,
    /// The null literal of a nullable field
    Null,
}

/// A rendered default expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefault {
    pub expr: String,
    pub source: DefaultSource,
}

/// A field ready for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedField {
    /// Target field name
    pub name: String,
    /// Field name as written in the schema
    pub raw_name: String,
    /// Presence-augmented target type expression
    pub ty: String,
    pub presence: Presence,
    pub default: Option<FieldDefault>,
    pub description: Option<String>,
}

impl TransformedField {
    /// Returns true if the field gets a default when constructed.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// An object type ready for one target, fields in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedObject {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<TransformedField>,
}

/// Transform one field for a target.
pub fn transform_field(field: &Field, target: &dyn TargetLanguage) -> TransformedField {
    let presence = field.presence();
    let ty = target.type_mapper().map_field_type(&field.ty, presence);

    let default = match (&field.default, presence) {
        (Some(value), _) => Some(FieldDefault {
            expr: target.render_default(value, &field.ty),
            source: DefaultSource::Explicit,
        }),
        (None, Presence::PossiblyAbsent { .. }) => Some(FieldDefault {
            expr: target.absent_default().to_string(),
            source: DefaultSource::Absent,
        }),
        (None, Presence::Nullable) => Some(FieldDefault {
            expr: target.null_default().to_string(),
            source: DefaultSource::Null,
        }),
        (None, Presence::Required) => None,
    };

    TransformedField {
        name: target.naming().field_name(&field.raw_name),
        raw_name: field.raw_name.clone(),
        ty,
        presence,
        default,
        description: field.description.clone(),
    }
}

/// Transform an object type for a target, ordering its fields for emission.
///
/// The reorder is a stable partition on whether a field has a default, so
/// fields keep their declaration order within each group.
pub fn transform_object(object: &ObjectType, target: &dyn TargetLanguage) -> TransformedObject {
    let (mut fields, defaulted): (Vec<_>, Vec<_>) = object
        .fields
        .iter()
        .map(|field| transform_field(field, target))
        .partition(|field| !field.has_default());
    fields.extend(defaulted);

    TransformedObject {
        name: object.name.clone(),
        description: object.description.clone(),
        fields,
    }
}

/// Transform every object type of a schema, in declaration order.
pub fn transform_schema(schema: &SchemaIR, target: &dyn TargetLanguage) -> Vec<TransformedObject> {
    schema
        .objects()
        .iter()
        .map(|object| transform_object(object, target))
        .collect()
}
