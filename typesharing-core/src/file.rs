use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held identical content and was left untouched
    Unchanged,
}

/// A generated file to be written to disk
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// Existing files with byte-identical content are not rewritten, which
    /// keeps modification times stable for watch-based tooling.
    pub fn write(&self) -> Result<WriteResult> {
        if let Ok(existing) = std::fs::read_to_string(&self.path) {
            if existing == self.content {
                tracing::debug!(path = %self.path.display(), "generated file unchanged");
                return Ok(WriteResult::Unchanged);
            }
        }

        write_file(&self.path, &self.content)?;
        tracing::debug!(path = %self.path.display(), bytes = self.content.len(), "wrote generated file");
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("entry_types.py");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("entry_types.ts");

        let file = File::new(&path, "export interface Entry {}\n");
        assert!(!file.exists());

        let result = file.write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert!(file.exists());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "export interface Entry {}\n"
        );
    }

    #[test]
    fn test_file_write_overwrites_changed_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("entry_types.py");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("entry_types.py");
        fs::write(&path, "same").unwrap();

        let result = File::new(&path, "same").write().unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }
}
