//! Python dataclass builder.

use typesharing_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::escape_docstring;

/// An attribute of a Python dataclass.
#[derive(Debug, Clone)]
pub struct DataclassField {
    pub name: String,
    pub ty: String,
    pub default: Option<String>,
    pub doc: Option<String>,
}

impl DataclassField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
            doc: None,
        }
    }

    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    fn declaration(&self) -> String {
        match &self.default {
            Some(default) => format!("{}: {} = {}", self.name, self.ty, default),
            None => format!("{}: {}", self.name, self.ty),
        }
    }
}

/// Builder for `@dataclass` classes.
///
/// Attributes render in the order they were added; callers are responsible
/// for placing defaulted attributes last.
#[derive(Debug, Clone)]
pub struct Dataclass {
    name: String,
    doc: Option<String>,
    fields: Vec<DataclassField>,
}

impl Dataclass {
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

    pub fn field(mut self, field: DataclassField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = DataclassField>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Render the dataclass to a CodeBuilder.
    pub fn render(&self, mut builder: CodeBuilder) -> CodeBuilder {
        builder.emit(self);
        builder
    }

    /// Build the dataclass as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::python()).build()
    }

    fn body_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        if let Some(doc) = &self.doc {
            body.push(CodeFragment::docstring(escape_docstring(doc)));
            if !self.fields.is_empty() {
                body.push(CodeFragment::blank());
            }
        }
        for field in &self.fields {
            body.push(CodeFragment::line(field.declaration()));
            if let Some(doc) = &field.doc {
                body.push(CodeFragment::docstring(escape_docstring(doc)));
            }
        }
        if body.is_empty() {
            body.push(CodeFragment::line("pass"));
        }
        body
    }
}

impl Renderable for Dataclass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::line("@dataclass"),
            CodeFragment::block(format!("class {}:", self.name), self.body_fragments(), None),
        ]
    }
}
