//! Source notations a schema document can be written in.

use std::{fmt, path::Path};

use crate::Node;

/// A structured-data notation that lowers into [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Yaml,
    Json,
    Toml,
}

/// A notation-level syntax error, before any schema rule is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    /// Byte offset and length of the offending text, when the parser reports one.
    pub span: Option<(usize, usize)>,
}

impl SourceFormat {
    /// All supported formats.
    pub const ALL: [SourceFormat; 3] = [SourceFormat::Yaml, SourceFormat::Json, SourceFormat::Toml];

    /// Pick a format from a file extension (case-insensitive, without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            "json" => Some(SourceFormat::Json),
            "toml" => Some(SourceFormat::Toml),
            _ => None,
        }
    }

    /// Pick a format from a file path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Yaml => "YAML",
            SourceFormat::Json => "JSON",
            SourceFormat::Toml => "TOML",
        }
    }

    /// Parse source text into a document tree.
    pub fn parse(&self, content: &str) -> Result<Node, SyntaxError> {
        match self {
            SourceFormat::Yaml => serde_yaml::from_str::<serde_yaml::Value>(content)
                .map(Node::from)
                .map_err(|e| SyntaxError {
                    span: e.location().map(|loc| (loc.index(), 1)),
                    message: e.to_string(),
                }),
            SourceFormat::Json => serde_json::from_str::<serde_json::Value>(content)
                .map(Node::from)
                .map_err(|e| SyntaxError {
                    span: line_column_offset(content, e.line(), e.column()).map(|at| (at, 1)),
                    message: e.to_string(),
                }),
            SourceFormat::Toml => toml::from_str::<toml::Table>(content)
                .map(Node::from)
                .map_err(|e| SyntaxError {
                    span: e.span().map(|range| (range.start, range.len())),
                    message: e.message().to_string(),
                }),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a 1-based line and column into a byte offset.
fn line_column_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in content.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            return Some((offset + column.saturating_sub(1)).min(content.len()));
        }
        offset += text.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(SourceFormat::from_extension("yaml"), Some(SourceFormat::Yaml));
        assert_eq!(SourceFormat::from_extension("YML"), Some(SourceFormat::Yaml));
        assert_eq!(SourceFormat::from_extension("json"), Some(SourceFormat::Json));
        assert_eq!(SourceFormat::from_extension("toml"), Some(SourceFormat::Toml));
        assert_eq!(SourceFormat::from_extension("txt"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            SourceFormat::from_path(Path::new("schemas/order.yml")),
            Some(SourceFormat::Yaml)
        );
        assert_eq!(SourceFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_parse_each_format() {
        let yaml = SourceFormat::Yaml.parse("A:\n  type: Object\n").unwrap();
        let json = SourceFormat::Json.parse(r#"{"A": {"type": "Object"}}"#).unwrap();
        let toml = SourceFormat::Toml.parse("[A]\ntype = \"Object\"\n").unwrap();
        assert_eq!(yaml, json);
        assert_eq!(json, toml);
    }

    #[test]
    fn test_yaml_syntax_error_has_span() {
        let err = SourceFormat::Yaml.parse("A: [unclosed\n").unwrap_err();
        assert!(err.span.is_some());
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_json_syntax_error_offset() {
        let content = "{\n  \"A\": ,\n}";
        let err = SourceFormat::Json.parse(content).unwrap_err();
        let (at, _) = err.span.unwrap();
        assert!((2..content.len()).contains(&at));
    }

    #[test]
    fn test_toml_syntax_error_has_span() {
        let err = SourceFormat::Toml.parse("[A\n").unwrap_err();
        assert!(err.span.is_some());
    }

    #[test]
    fn test_line_column_offset() {
        assert_eq!(line_column_offset("ab\ncd", 2, 2), Some(4));
        assert_eq!(line_column_offset("ab\ncd", 1, 1), Some(0));
        assert_eq!(line_column_offset("ab", 3, 1), None);
        assert_eq!(line_column_offset("ab", 0, 0), None);
    }
}
