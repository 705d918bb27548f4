//! Generate operation - code generation from one schema file.

use std::path::Path;

use eyre::{Context, Result};
use tracing::info;
use typesharing_schema::SchemaFile;

use crate::{
    language::Target,
    reports::{GenerateReport, GenerationResult, PreviewFile, WrittenFile},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Targets to generate, in order.
    pub targets: &'a [Target],
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Renders the schema once per target and writes (or previews) the files.
pub fn generate(file: &SchemaFile, opts: &GenerateOptions) -> Result<GenerateReport> {
    let schema = file.schema();
    let base_name = file.base_name();

    let result = if opts.dry_run {
        let files = opts
            .targets
            .iter()
            .flat_map(|target| target.generator(schema).preview(base_name))
            .map(|f| PreviewFile {
                path: opts.output_dir.join(f.path),
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let mut files = Vec::new();
        for target in opts.targets {
            let result = target
                .generator(schema)
                .generate(base_name, opts.output_dir)
                .wrap_err_with(|| format!("Failed to generate {} code", target))?;
            files.extend(
                result
                    .files
                    .into_iter()
                    .map(|(path, outcome)| WrittenFile { path, outcome }),
            );
        }
        GenerationResult::Written(files)
    };

    info!(
        path = %file.path().display(),
        targets = opts.targets.len(),
        dry_run = opts.dry_run,
        "generated schema"
    );

    Ok(GenerateReport {
        source: file.path().to_path_buf(),
        object_count: schema.len(),
        field_count: schema.field_count(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use typesharing_core::WriteResult;

    use super::*;

    const SCHEMA: &str = "Item:\n  type: Object\n  properties:\n    amount:\n      type: Integer\n";

    fn schema_file(dir: &Path) -> SchemaFile {
        let path = dir.join("orders.yaml");
        std::fs::write(&path, SCHEMA).unwrap();
        SchemaFile::open(&path).unwrap()
    }

    #[test]
    fn test_generate_writes_every_target() {
        let dir = tempfile::tempdir().unwrap();
        let file = schema_file(dir.path());
        let output_dir = dir.path().join("out");

        let report = generate(
            &file,
            &GenerateOptions {
                output_dir: &output_dir,
                targets: &Target::ALL,
                dry_run: false,
            },
        )
        .unwrap();

        assert_eq!(report.object_count, 1);
        assert_eq!(report.field_count, 1);
        let GenerationResult::Written(files) = &report.result else {
            panic!("expected written files");
        };
        let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            [
                output_dir.join("orders_types.py"),
                output_dir.join("orders_types.ts")
            ]
        );
        assert!(files.iter().all(|f| f.outcome == WriteResult::Written));
        assert!(output_dir.join("orders_types.py").is_file());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let file = schema_file(dir.path());
        let output_dir = dir.path().join("out");

        let report = generate(
            &file,
            &GenerateOptions {
                output_dir: &output_dir,
                targets: &[Target::TypeScript],
                dry_run: true,
            },
        )
        .unwrap();

        let GenerationResult::Preview(files) = &report.result else {
            panic!("expected a preview");
        };
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, output_dir.join("orders_types.ts"));
        assert!(files[0].content.contains("export interface Item {"));
        assert!(!output_dir.exists());
    }
}
