//! Schema input discovery.

use std::{
    collections::HashMap,
    ffi::OsStr,
    path::{Path, PathBuf},
};

use eyre::{Context, Result, bail};
use typesharing_schema::SourceFormat;

/// Collect the schema files named by an input path.
///
/// A file is taken as is, whatever its extension. A directory contributes
/// every file with a schema extension directly inside it, sorted by path.
pub fn schema_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        bail!("{} does not exist", input.display());
    }

    let entries = std::fs::read_dir(input)
        .wrap_err_with(|| format!("Failed to read directory {}", input.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .wrap_err_with(|| format!("Failed to read directory {}", input.display()))?
            .path();
        if path.is_file() && SourceFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        bail!("no schema files (.yaml, .yml, .json, .toml) in {}", input.display());
    }
    Ok(files)
}

/// Reject inputs whose generated files would overwrite each other.
///
/// Output files are named after the schema's file stem, so `orders.yaml`
/// and `orders.json` both generate `orders_types.*`.
pub fn ensure_distinct_base_names(files: &[PathBuf]) -> Result<()> {
    let mut seen: HashMap<&OsStr, &Path> = HashMap::new();
    for path in files {
        let Some(stem) = path.file_stem() else {
            continue;
        };
        if let Some(other) = seen.insert(stem, path) {
            bail!(
                "{} and {} would generate the same files ({}_types.*); rename one of them",
                other.display(),
                path.display(),
                stem.to_string_lossy()
            );
        }
    }
    Ok(())
}
