use typesharing_codegen::{ImportCollector, LanguageCodegen, TransformedObject, transform_schema};
use typesharing_ir::{DefaultValue, Field, Presence, ScalarType, SchemaIR};

use crate::{
    CodeFile,
    ast::{Dataclass, DataclassField, MissingTypeClass},
    target::PythonTarget,
};

/// Leading comment of every generated module.
pub const HEADER: &str = "Code generated by typesharing. DO NOT EDIT.";

/// Python code generator that produces one module of dataclasses per schema
pub struct Generator<'a> {
    schema: &'a SchemaIR,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "python"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn render(&self) -> String {
        let objects = transform_schema(self.schema, &PythonTarget);

        let mut file = CodeFile::new().header(HEADER).imports(&self.collect_imports());
        if self.needs_missing_type() {
            file = file.add(MissingTypeClass);
        }
        file.add_all(objects.iter().map(dataclass)).render()
    }
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a SchemaIR) -> Self {
        Self { schema }
    }

    fn fields(&self) -> impl Iterator<Item = &Field> {
        self.schema
            .objects()
            .iter()
            .flat_map(|object| object.fields.iter())
    }

    fn needs_missing_type(&self) -> bool {
        self.fields().any(|field| field.presence().admits_absence())
    }

    /// Collect the imports the module actually uses.
    fn collect_imports(&self) -> ImportCollector {
        let mut imports = ImportCollector::new();
        imports.add("__future__", "annotations");
        imports.add("dataclasses", "dataclass");

        for field in self.fields() {
            if field.ty.is_list() {
                imports.add("typing", "List");
            }
            match field.ty.leaf_scalar() {
                Some(ScalarType::Decimal) => imports.add("decimal", "Decimal"),
                Some(ScalarType::Date) => imports.add("datetime", "date"),
                _ => {}
            }
            match field.presence() {
                Presence::Required => {}
                Presence::Nullable => imports.add("typing", "Optional"),
                Presence::PossiblyAbsent { .. } => imports.add("typing", "Union"),
            }
            if matches!(&field.default, Some(DefaultValue::List(_))) {
                imports.add("dataclasses", "field");
            }
        }
        imports
    }
}

fn dataclass(object: &TransformedObject) -> Dataclass {
    let fields = object.fields.iter().map(|field| {
        let mut attribute = DataclassField::new(&field.name, &field.ty);
        if let Some(default) = &field.default {
            attribute = attribute.default(&default.expr);
        }
        if let Some(doc) = &field.description {
            attribute = attribute.doc(doc);
        }
        attribute
    });

    let class = Dataclass::new(&object.name).fields(fields);
    match &object.description {
        Some(doc) => class.doc(doc),
        None => class,
    }
}

#[cfg(test)]
mod tests {
    use typesharing_ir::{ObjectType, TypeRef};

    use super::*;

    fn schema(objects: Vec<ObjectType>) -> SchemaIR {
        SchemaIR::new(objects)
    }

    #[test]
    fn test_minimal_imports() {
        let schema = schema(vec![
            ObjectType::new("Item")
                .field(Field::new("amount", TypeRef::scalar(ScalarType::Integer))),
        ]);
        let code = Generator::new(&schema).render();
        assert!(code.contains("from dataclasses import dataclass\n"));
        assert!(!code.contains("typing"));
        assert!(!code.contains("MissingType"));
    }

    #[test]
    fn test_imports_follow_usage() {
        let schema = schema(vec![
            ObjectType::new("Invoice")
                .field(Field::new("issued", TypeRef::scalar(ScalarType::Date)))
                .field(Field::new(
                    "totals?",
                    TypeRef::list(TypeRef::scalar(ScalarType::Decimal)),
                ))
                .field(
                    Field::new("tags", TypeRef::list(TypeRef::scalar(ScalarType::String)))
                        .default_value(DefaultValue::List(vec![])),
                ),
        ]);
        let code = Generator::new(&schema).render();
        assert!(code.contains("from dataclasses import dataclass, field\n"));
        assert!(code.contains("from datetime import date\n"));
        assert!(code.contains("from decimal import Decimal\n"));
        assert!(code.contains("from typing import List, Optional\n"));
        assert!(code.contains("    tags: List[str] = field(default_factory=list)\n"));
    }

    #[test]
    fn test_missing_type_emitted_once_when_needed() {
        let schema = schema(vec![
            ObjectType::new("A")
                .field(Field::new("x", TypeRef::scalar(ScalarType::String)).missing()),
            ObjectType::new("B")
                .field(Field::new("y?", TypeRef::scalar(ScalarType::String)).missing()),
        ]);
        let code = Generator::new(&schema).render();
        assert_eq!(code.matches("class MissingType:").count(), 1);
        assert!(code.contains("    x: Union[str, MissingType] = MissingType()\n"));
        assert!(code.contains("    y: Union[str, None, MissingType] = MissingType()\n"));
        assert!(code.find("class MissingType").unwrap() < code.find("class A").unwrap());
    }

    #[test]
    fn test_file_name() {
        let schema = schema(vec![]);
        assert_eq!(Generator::new(&schema).file_name("order"), "order_types.py");
    }
}
