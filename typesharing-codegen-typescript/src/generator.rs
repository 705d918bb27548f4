use typesharing_codegen::{DefaultSource, LanguageCodegen, TransformedObject, transform_schema};
use typesharing_ir::SchemaIR;

use crate::{
    CodeFile,
    ast::{Interface, InterfaceField},
    target::TypeScriptTarget,
};

/// Leading comment of every generated file.
pub const HEADER: &str = "Code generated by typesharing. DO NOT EDIT.";

/// TypeScript code generator that produces one file of interfaces per schema
pub struct Generator<'a> {
    schema: &'a SchemaIR,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn render(&self) -> String {
        let objects = transform_schema(self.schema, &TypeScriptTarget);
        CodeFile::new()
            .header(HEADER)
            .add_all(objects.iter().map(interface))
            .render()
    }
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a SchemaIR) -> Self {
        Self { schema }
    }
}

/// Only explicit defaults are documented; implicit ones are implied by the type.
fn interface(object: &TransformedObject) -> Interface {
    let interface = object.fields.iter().fold(
        Interface::new(&object.name),
        |interface, field| {
            let mut property = InterfaceField::new(&field.name, &field.ty);
            if field.presence.admits_absence() {
                property = property.optional();
            }
            if let Some(doc) = &field.description {
                property = property.doc(doc);
            }
            if let Some(default) = field
                .default
                .as_ref()
                .filter(|default| default.source == DefaultSource::Explicit)
            {
                property = property.default(&default.expr);
            }
            interface.field_with(property)
        },
    );

    match &object.description {
        Some(doc) => interface.doc(doc),
        None => interface,
    }
}
