//! Check operation - schema summary.

use tracing::info;
use typesharing_ir::Presence;
use typesharing_schema::SchemaFile;

use crate::reports::{CheckReport, ObjectSummary};

/// Execute the check operation.
///
/// The schema was validated when the file was opened; this summarizes it.
pub fn check(file: &SchemaFile) -> CheckReport {
    let objects: Vec<ObjectSummary> = file
        .schema()
        .objects()
        .iter()
        .map(|object| ObjectSummary {
            name: object.name.clone(),
            fields: object.fields.len(),
            nullable: object
                .fields
                .iter()
                .filter(|field| field.presence() == Presence::Nullable)
                .count(),
            possibly_absent: object
                .fields
                .iter()
                .filter(|field| field.presence().admits_absence())
                .count(),
        })
        .collect();

    info!(path = %file.path().display(), objects = objects.len(), "schema is valid");

    CheckReport {
        source: file.path().to_path_buf(),
        format: file.format(),
        objects,
    }
}
