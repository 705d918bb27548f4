//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with a header
//! comment followed by body declarations.

use typesharing_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A structured representation of a TypeScript file.
///
/// Organizes code into two sections: header and body.
/// Body declarations are separated by one blank line.
///
/// # Example
///
/// ```
/// use typesharing_codegen_typescript::{CodeFile, Interface};
///
/// let code = CodeFile::new()
///     .header("Code generated by typesharing. DO NOT EDIT.")
///     .add(Interface::new("Item").field("amount", "number"))
///     .render();
///
/// assert_eq!(
///     code,
///     "// Code generated by typesharing. DO NOT EDIT.\n\nexport interface Item {\n  amount: number;\n}\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Option<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the leading line comment.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        // 1. Render header
        if let Some(header) = &self.header {
            for line in header.lines() {
                builder.push_line(&format!("// {}", line));
            }
        }

        // 2. Render body with blank lines between elements
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 || self.header.is_some() {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.body.is_empty()
    }
}
