//! Unified target dispatch.
//!
//! Centralizes target-specific generator creation and metadata.

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;
use typesharing_codegen::LanguageCodegen;
use typesharing_codegen_python::Generator as PythonGenerator;
use typesharing_codegen_typescript::Generator as TypeScriptGenerator;
use typesharing_ir::SchemaIR;

/// A target language for generated declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Python dataclasses
    Python,
    /// TypeScript interfaces
    #[value(name = "typescript", alias = "ts")]
    #[serde(alias = "ts")]
    TypeScript,
}

impl Target {
    /// Every target, in generation order.
    pub const ALL: [Target; 2] = [Target::Python, Target::TypeScript];

    /// Create a generator for this target.
    pub fn generator<'a>(&self, schema: &'a SchemaIR) -> Box<dyn LanguageCodegen + 'a> {
        match self {
            Target::Python => Box::new(PythonGenerator::new(schema)),
            Target::TypeScript => Box::new(TypeScriptGenerator::new(schema)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Python => "python",
            Target::TypeScript => "typescript",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deduplicate targets, keeping the first occurrence of each.
pub fn dedup_targets(targets: &[Target]) -> Vec<Target> {
    let mut unique = Vec::with_capacity(targets.len());
    for target in targets {
        if !unique.contains(target) {
            unique.push(*target);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use typesharing_ir::{Field, ObjectType, ScalarType, TypeRef};

    use super::*;

    #[test]
    fn test_generator_per_target() {
        let schema = SchemaIR::new(vec![
            ObjectType::new("Item")
                .field(Field::new("amount", TypeRef::scalar(ScalarType::Integer))),
        ]);
        for target in Target::ALL {
            let generator = target.generator(&schema);
            assert_eq!(generator.language(), target.as_str());
        }
        assert_eq!(
            Target::TypeScript.generator(&schema).file_name("orders"),
            "orders_types.ts"
        );
    }

    #[test]
    fn test_parse_target_names() {
        assert_eq!(Target::from_str("python", true), Ok(Target::Python));
        assert_eq!(Target::from_str("typescript", true), Ok(Target::TypeScript));
        assert_eq!(Target::from_str("ts", true), Ok(Target::TypeScript));
        assert!(Target::from_str("rust", true).is_err());
    }

    #[test]
    fn test_dedup_targets() {
        let targets = [Target::TypeScript, Target::Python, Target::TypeScript];
        assert_eq!(dedup_targets(&targets), [Target::TypeScript, Target::Python]);
    }
}
