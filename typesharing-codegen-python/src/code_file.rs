//! CodeFile abstraction for structured Python module generation.
//!
//! Provides a high-level API for generating Python modules with a header
//! comment, organized imports and top-level definitions.

use typesharing_codegen::{CodeBuilder, CodeFragment, ImportCollector, Renderable};

use crate::ast::FromImport;

/// A structured representation of a Python module.
///
/// Organizes code into three sections: header, imports, and body.
/// `from __future__` imports always come first; top-level definitions are
/// separated by two blank lines.
///
/// # Example
///
/// ```
/// use typesharing_codegen::ImportCollector;
/// use typesharing_codegen_python::{CodeFile, Dataclass, DataclassField};
///
/// let mut imports = ImportCollector::new();
/// imports.add("dataclasses", "dataclass");
///
/// let code = CodeFile::new()
///     .header("Code generated by typesharing. DO NOT EDIT.")
///     .imports(&imports)
///     .add(Dataclass::new("Item").field(DataclassField::new("amount", "int")))
///     .render();
///
/// assert!(code.starts_with("# Code generated by typesharing. DO NOT EDIT.\n"));
/// assert!(code.contains("from dataclasses import dataclass\n\n\n@dataclass\n"));
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Option<String>,
    imports: Vec<FromImport>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the leading comment.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: FromImport) -> Self {
        self.imports.push(import);
        self
    }

    /// Add every import of a collector, modules ordered by name.
    ///
    /// `__future__` sorts before every other module name, so future imports
    /// stay first.
    pub fn imports(mut self, imports: &ImportCollector) -> Self {
        for (module, names) in imports.sorted() {
            self.imports.push(FromImport::new(module).names(names.iter()));
        }
        self
    }

    /// Add a top-level definition (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple top-level definitions.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the module with Python indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::python();

        // 1. Header comment
        if let Some(header) = &self.header {
            for line in header.lines() {
                builder.push_line(&format!("# {}", line));
            }
            if !self.imports.is_empty() || !self.body.is_empty() {
                builder.push_blank();
            }
        }

        // 2. Imports, future imports in their own group
        let (future, imports): (Vec<_>, Vec<_>) = self
            .imports
            .iter()
            .partition(|import| import.module() == "__future__");
        for import in &future {
            builder.emit(*import);
        }
        if !future.is_empty() && !imports.is_empty() {
            builder.push_blank();
        }
        for import in &imports {
            builder.emit(*import);
        }

        // 3. Body, two blank lines around every top-level definition
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 || !self.imports.is_empty() {
                builder.push_blank().push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.imports.is_empty() && self.body.is_empty()
    }
}
