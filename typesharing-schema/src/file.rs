use std::path::{Path, PathBuf};

use typesharing_ir::SchemaIR;

use crate::{Error, Result, SourceFormat, parse_str_with_filename};

/// A schema file with both raw content and the validated IR.
#[derive(Debug)]
pub struct SchemaFile {
    path: PathBuf,
    format: SourceFormat,
    content: String,
    schema: SchemaIR,
}

impl SchemaFile {
    /// Open, parse and validate a schema file. The format is chosen from the extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let format = SourceFormat::from_path(&path)
            .ok_or_else(|| Box::new(Error::UnsupportedFormat { path: path.clone() }))?;
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let schema = parse_str_with_filename(&content, format, &filename)?;

        Ok(Self {
            path,
            format,
            content,
            schema,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the source format.
    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the validated schema.
    pub fn schema(&self) -> &SchemaIR {
        &self.schema
    }

    /// Consume the file, keeping only the validated schema.
    pub fn into_schema(self) -> SchemaIR {
        self.schema
    }

    /// The file name without directory or extension, used to name generated files.
    pub fn base_name(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("schema")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const ITEM: &str = "Item:\n  type: Object\n  properties:\n    amount:\n      type: Integer\n";

    #[test]
    fn test_open_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order.yaml");
        std::fs::write(&path, ITEM).unwrap();

        let file = SchemaFile::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.format(), SourceFormat::Yaml);
        assert_eq!(file.content(), ITEM);
        assert_eq!(file.base_name(), "order");
        assert_eq!(file.schema().len(), 1);
    }

    #[test]
    fn test_open_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order.json");
        std::fs::write(
            &path,
            r#"{"Item": {"type": "Object", "properties": {"amount": {"type": "Integer"}}}}"#,
        )
        .unwrap();

        let file = SchemaFile::open(&path).unwrap();
        assert_eq!(file.format(), SourceFormat::Json);
        assert_eq!(file.into_schema().field_count(), 1);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SchemaFile::open(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order.txt");
        std::fs::write(&path, ITEM).unwrap();
        let err = SchemaFile::open(&path).unwrap_err();
        assert!(matches!(*err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_open_invalid_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yml");
        std::fs::write(&path, "Item:\n  type: Record\n").unwrap();
        let err = SchemaFile::open(&path).unwrap_err();
        assert_eq!(
            err.validation_error().map(|e| e.kind()),
            Some(ErrorKind::TypeKind)
        );
    }
}
