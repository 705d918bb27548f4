//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Builder for code with proper indentation.
///
/// Methods return `&mut Self` so emission can be chained or done
/// incrementally.
///
/// # Example
///
/// ```
/// use typesharing_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("export interface Item {")
///     .push_indent()
///     .push_line("amount: number;")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "export interface Item {\n  amount: number;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Python default).
    pub fn python() -> Self {
        Self::new(Indent::PYTHON)
    }

    /// Create a new CodeBuilder with 2-space indentation (JS/TS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a JSDoc comment.
    ///
    /// Single-line text renders as `/** text */`; anything longer renders as a
    /// block with one ` * ` prefixed line per input line.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        if !text.contains('\n') {
            self.write_indent();
            self.buffer.push_str("/** ");
            self.buffer.push_str(text);
            self.buffer.push_str(" */\n");
            return self;
        }

        self.push_line("/**");
        for line in text.lines() {
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {line}"));
            }
        }
        self.push_line(" */")
    }

    /// Add a Python docstring.
    pub fn push_docstring(&mut self, text: &str) -> &mut Self {
        if !text.contains('\n') {
            return self.push_line(&format!("\"\"\"{text}\"\"\""));
        }

        let mut lines = text.lines();
        let first = lines.next().unwrap_or_default();
        self.push_line(&format!("\"\"\"{first}"));
        for line in lines {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self.push_line("\"\"\"")
    }

    /// Emit a Renderable node.
    ///
    /// This is the primary way to render AST nodes.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(&text);
            }
            CodeFragment::Docstring(text) => {
                self.push_docstring(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}
