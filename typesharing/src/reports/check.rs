//! Check command report data structures.

use std::path::PathBuf;

use typesharing_schema::SourceFormat;

use super::{
    count,
    output::{Output, Report},
};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub source: PathBuf,
    /// Notation the schema is written in.
    pub format: SourceFormat,
    /// Object types in declaration order.
    pub objects: Vec<ObjectSummary>,
}

/// Field counts of one object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    pub name: String,
    pub fields: usize,
    pub nullable: usize,
    pub possibly_absent: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!(
            "✓ {} is valid ({})",
            self.source.display(),
            self.format
        ));
        out.newline();
        out.section(&count(self.objects.len(), "object type"));

        for object in &self.objects {
            let mut details = Vec::new();
            if object.nullable > 0 {
                details.push(format!("{} nullable", object.nullable));
            }
            if object.possibly_absent > 0 {
                details.push(format!("{} possibly absent", object.possibly_absent));
            }
            let fields = count(object.fields, "field");
            if details.is_empty() {
                out.list_item(&format!("{} ({})", object.name, fields));
            } else {
                out.list_item(&format!(
                    "{} ({}: {})",
                    object.name,
                    fields,
                    details.join(", ")
                ));
            }
        }
    }
}
