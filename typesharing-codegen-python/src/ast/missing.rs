//! The absent-field marker class.

use typesharing_codegen::{CodeFragment, Renderable};

/// Renders the `MissingType` class.
///
/// Instances compare equal to each other and hash alike, so a dataclass
/// holding one stays comparable and usable as a default.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingTypeClass;

impl MissingTypeClass {
    pub const NAME: &'static str = "MissingType";
}

impl Renderable for MissingTypeClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let method = |signature: &str, body: &str| {
            CodeFragment::block(format!("def {}:", signature), vec![CodeFragment::line(body)], None)
        };

        vec![CodeFragment::block(
            format!("class {}:", Self::NAME),
            vec![
                CodeFragment::docstring("Marker for a field that is absent from the object."),
                CodeFragment::blank(),
                method(
                    "__eq__(self, other: object) -> bool",
                    "return isinstance(other, MissingType)",
                ),
                CodeFragment::blank(),
                method("__hash__(self) -> int", "return hash(MissingType)"),
                CodeFragment::blank(),
                method("__repr__(self) -> str", "return \"MissingType()\""),
            ],
            None,
        )]
    }
}
