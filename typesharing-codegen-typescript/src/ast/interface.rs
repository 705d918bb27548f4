//! TypeScript interface builder.

use typesharing_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::escape_jsdoc;

/// A property of a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub doc: Option<String>,
    pub default: Option<String>,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            doc: None,
            default: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Document a default value with a `@default` tag.
    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    fn declaration(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}: {};", self.name, optional, self.ty)
    }

    fn jsdoc(&self) -> Option<String> {
        let default = self.default.as_ref().map(|d| format!("@default {}", d));
        let text = match (&self.doc, default) {
            (Some(doc), Some(default)) => format!("{}\n\n{}", doc, default),
            (Some(doc), None) => doc.clone(),
            (None, Some(default)) => default,
            (None, None) => return None,
        };
        Some(escape_jsdoc(&text))
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add a field with full configuration.
    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    /// Render the interface to a CodeBuilder.
    pub fn render(&self, mut builder: CodeBuilder) -> CodeBuilder {
        builder.emit(self);
        builder
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }

    /// Convert fields to code fragments.
    fn fields_to_fragments(&self) -> Vec<CodeFragment> {
        self.fields
            .iter()
            .flat_map(|field| {
                field
                    .jsdoc()
                    .map(CodeFragment::JsDoc)
                    .into_iter()
                    .chain([CodeFragment::Line(field.declaration())])
            })
            .collect()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .doc
            .as_deref()
            .map(|doc| CodeFragment::JsDoc(escape_jsdoc(doc)))
            .into_iter()
            .collect();

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "export interface {} {{}}",
                self.name
            )));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("export interface {} {{", self.name),
                body: self.fields_to_fragments(),
                close: Some("}".to_string()),
            });
        }
        fragments
    }
}
