//! Generate command report data structures.

use std::path::PathBuf;

use typesharing_core::WriteResult;

use super::{
    count,
    output::{Output, Report},
};

/// Report data from generating one schema.
#[derive(Debug)]
pub struct GenerateReport {
    /// Schema file the code was generated from.
    pub source: PathBuf,
    /// Number of object types in the schema.
    pub object_count: usize,
    /// Number of fields across all object types.
    pub field_count: usize,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(Vec<WrittenFile>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file considered for writing.
#[derive(Debug)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub outcome: WriteResult,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl GenerateReport {
    /// Number of files produced or previewed.
    pub fn file_count(&self) -> usize {
        match &self.result {
            GenerationResult::Written(files) => files.len(),
            GenerationResult::Preview(files) => files.len(),
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(files) => {
                out.preformatted(&format!(
                    "{} ({}, {})",
                    self.source.display(),
                    count(self.object_count, "object type"),
                    count(self.field_count, "field")
                ));
                for file in files {
                    match file.outcome {
                        WriteResult::Written => out.added_item(&file.path.display().to_string()),
                        WriteResult::Unchanged => {
                            out.unchanged_item(&format!("{} (unchanged)", file.path.display()))
                        }
                    }
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path.display().to_string());
                    out.preformatted(&file.content);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            source: PathBuf::from("orders.yaml"),
            object_count: 2,
            field_count: 1,
            result: GenerationResult::Written(vec![
                WrittenFile {
                    path: PathBuf::from("out/orders_types.py"),
                    outcome: WriteResult::Written,
                },
                WrittenFile {
                    path: PathBuf::from("out/orders_types.ts"),
                    outcome: WriteResult::Unchanged,
                },
            ]),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "orders.yaml (2 object types, 1 field)",
                "  + out/orders_types.py",
                "  = out/orders_types.ts (unchanged)",
            ]
        );
        assert_eq!(report.file_count(), 2);
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            source: PathBuf::from("orders.yaml"),
            object_count: 1,
            field_count: 1,
            result: GenerationResult::Preview(vec![PreviewFile {
                path: PathBuf::from("orders_types.ts"),
                content: "export interface Item {}\n".to_string(),
            }]),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            ["── orders_types.ts ──", "export interface Item {}"]
        );
    }
}
