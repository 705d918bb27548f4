//! Python import statements.

use typesharing_codegen::{CodeFragment, Renderable};

/// A `from module import a, b` statement.
#[derive(Debug, Clone)]
pub struct FromImport {
    module: String,
    names: Vec<String>,
}

impl FromImport {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            names: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn names(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn module(&self) -> &str {
        &self.module
    }
}

impl Renderable for FromImport {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "from {} import {}",
            self.module,
            self.names.join(", ")
        ))]
    }
}
