//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{path::Path, process::Command};

use eyre::{Result, eyre};

use crate::language::LanguageCodegen;

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code compiles/type-checks.
pub trait CompileChecker {
    /// Check that the generated files in the given directory are valid.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Python syntax checker using `python3 -m py_compile`.
pub struct PythonChecker;

impl CompileChecker for PythonChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let files = files_with_extension(dir, "py")?;
        let mut command = Command::new("python3");
        command.args(["-m", "py_compile"]).args(&files);
        run(command, "python3 -m py_compile", dir)
    }
}

/// Python type checker using `python3 -m mypy --strict`.
///
/// Catches what a syntax check cannot, such as two attributes of one
/// dataclass sharing a name.
pub struct MypyChecker;

impl CompileChecker for MypyChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let files = files_with_extension(dir, "py")?;
        let mut command = Command::new("python3");
        command
            .args(["-m", "mypy", "--strict", "--no-error-summary"])
            .args(&files);
        run(command, "mypy --strict", dir)
    }
}

/// TypeScript checker using `tsc --noEmit --strict`.
pub struct TypeScriptChecker;

impl CompileChecker for TypeScriptChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let files = files_with_extension(dir, "ts")?;
        let mut command = Command::new("npx");
        command.args(["tsc", "--noEmit", "--strict"]).args(&files);
        run(command, "tsc --noEmit", dir)
    }
}

fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<String>, CompileError> {
    let entries = std::fs::read_dir(dir).map_err(|e| CompileError {
        message: format!("Failed to read {}: {}", dir.display(), e),
        output: String::new(),
    })?;
    let mut files: Vec<String> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .filter_map(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .collect();
    files.sort();
    Ok(files)
}

fn run(mut command: Command, name: &str, dir: &Path) -> Result<(), CompileError> {
    let output = command
        .current_dir(dir)
        .output()
        .map_err(|e| CompileError {
            message: format!("Failed to run {}: {}", name, e),
            output: String::new(),
        })?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        Err(CompileError {
            message: format!("{} failed", name),
            output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
        })
    }
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        // Simple line-by-line diff
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate a schema's output into a temporary directory and check it.
///
/// The directory is removed once the check finishes.
pub fn assert_generates_valid_code<C>(
    codegen: &impl LanguageCodegen,
    base_name: &str,
    checker: &C,
) -> Result<()>
where
    C: CompileChecker,
{
    let temp_dir = tempfile::TempDir::new()?;
    codegen.generate(base_name, temp_dir.path())?;

    checker.check(temp_dir.path()).map_err(|e| {
        // Print the generated files for debugging
        eprintln!("Generated files in {}:", temp_dir.path().display());
        for file in codegen.preview(base_name) {
            eprintln!("--- {}\n{}", file.path, file.content);
        }
        eyre!("Compile check failed: {}", e)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_content_eq_passes_on_equal() {
        assert_content_eq("a\nb\n", "a\nb\n");
    }

    #[test]
    #[should_panic(expected = "Line 2")]
    fn test_assert_content_eq_reports_line() {
        assert_content_eq("a\nb\n", "a\nc\n");
    }

    #[test]
    fn test_files_with_extension_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b_types.py", "a_types.py", "a_types.ts"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        assert_eq!(
            files_with_extension(dir.path(), "py").unwrap(),
            ["a_types.py", "b_types.py"]
        );
    }
}
