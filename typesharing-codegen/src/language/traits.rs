//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use tracing::debug;
use typesharing_core::{File, WriteResult};
use typesharing_ir::{DefaultValue, Presence, ScalarType, TypeRef};

use super::NamingConvention;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating type declarations in a
/// new language. A generator is built for one validated schema and renders it
/// into a single source file.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "python", "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "py", "ts")
    fn file_extension(&self) -> &'static str;

    /// Render the complete source text.
    fn render(&self) -> String;

    /// Output file name for a schema file named `base_name` (without extension).
    fn file_name(&self, base_name: &str) -> String {
        format!("{base_name}_types.{}", self.file_extension())
    }

    /// Preview generated files without writing to disk
    fn preview(&self, base_name: &str) -> Vec<PreviewFile> {
        vec![PreviewFile {
            path: self.file_name(base_name),
            content: self.render(),
        }]
    }

    /// Generate all files into the specified output directory
    fn generate(&self, base_name: &str, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for preview in self.preview(base_name) {
            let file = File::new(output_dir.join(&preview.path), preview.content);
            let outcome = file.write()?;
            debug!(
                language = self.language(),
                path = %file.path().display(),
                ?outcome,
                "generated file"
            );
            result.files.push((file.path().to_path_buf(), outcome));
        }
        Ok(result)
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were considered, with whether they were rewritten
    pub files: Vec<(PathBuf, WriteResult)>,
}

impl GenerateResult {
    /// Paths of files whose content changed.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(|(_, outcome)| *outcome == WriteResult::Written)
            .map(|(path, _)| path.as_path())
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping schema types to language-specific type expressions.
///
/// Implement this trait for each target language to provide type mappings.
/// Every scalar must map to a non-empty expression; list nesting is handled
/// here iteratively, so implementors only describe one level of wrapping.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a scalar to a language-specific type
    fn map_scalar(&self, scalar: ScalarType) -> &'static str;

    /// Map an object type name. Type names are used verbatim by default.
    fn map_named(&self, name: &str) -> String {
        name.to_string()
    }

    /// Wrap an element type in the language's list type
    fn wrap_list(&self, inner: String) -> String;

    /// Wrap a type so a present value may be null
    fn wrap_nullable(&self, ty: String) -> String;

    /// Wrap a type so the field may be absent (and also null if `nullable`)
    fn wrap_possibly_absent(&self, ty: String, nullable: bool) -> String;

    /// Map a type reference of any list depth.
    fn map_type(&self, ty: &TypeRef) -> String {
        let mut depth = 0;
        let mut current = ty;
        let leaf = loop {
            match current {
                TypeRef::List(inner) => {
                    depth += 1;
                    current = inner;
                }
                TypeRef::Scalar(scalar) => break self.map_scalar(*scalar).to_string(),
                TypeRef::Named(name) => break self.map_named(name),
            }
        };
        (0..depth).fold(leaf, |inner, _| self.wrap_list(inner))
    }

    /// Map a field type, augmented for its presence class.
    fn map_field_type(&self, ty: &TypeRef, presence: Presence) -> String {
        let mapped = self.map_type(ty);
        match presence {
            Presence::Required => mapped,
            Presence::Nullable => self.wrap_nullable(mapped),
            Presence::PossiblyAbsent { nullable } => self.wrap_possibly_absent(mapped, nullable),
        }
    }
}

/// Everything the field transformer needs to know about one target.
pub trait TargetLanguage {
    /// The target's type mapper
    fn type_mapper(&self) -> &dyn TypeMapper;

    /// The target's naming rules
    fn naming(&self) -> &NamingConvention;

    /// Render an explicit default literal for a field of type `ty`.
    fn render_default(&self, value: &DefaultValue, ty: &TypeRef) -> String;

    /// The implicit default of a nullable field
    fn null_default(&self) -> &'static str;

    /// The implicit default of a possibly-absent field
    fn absent_default(&self) -> &'static str;
}
