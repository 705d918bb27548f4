//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! This module provides abstractions that allow AST nodes to be composed
//! and rendered without direct coupling to CodeBuilder.

/// Represents a fragment of generated code.
///
/// CodeFragments form an intermediate representation between AST nodes
/// and the final string output, enabling composition and transformation.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A JSDoc comment; multi-line text renders as a block comment.
    JsDoc(String),
    /// A Python docstring; multi-line text keeps its closing quotes on their own line.
    Docstring(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create a JSDoc comment fragment.
    pub fn jsdoc(s: impl Into<String>) -> Self {
        Self::JsDoc(s.into())
    }

    /// Create a Python docstring fragment.
    pub fn docstring(s: impl Into<String>) -> Self {
        Self::Docstring(s.into())
    }
}

/// Trait for types that can be rendered to code fragments.
///
/// Implement this trait for AST nodes to enable them to be rendered
/// through CodeBuilder without direct coupling.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
        assert_eq!(CodeFragment::blank(), CodeFragment::Blank);
        assert_eq!(
            CodeFragment::docstring("An item."),
            CodeFragment::Docstring("An item.".to_string())
        );
    }

    #[test]
    fn test_block_fragment() {
        let block = CodeFragment::block(
            "export interface Item {",
            vec![CodeFragment::line("amount: number;")],
            Some("}".to_string()),
        );
        match block {
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                assert_eq!(header, "export interface Item {");
                assert_eq!(body.len(), 1);
                assert_eq!(close, Some("}".to_string()));
            }
            _ => panic!("Expected Block variant"),
        }
    }
}
