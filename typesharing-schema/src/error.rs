use std::{fmt, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::{SourceFormat, SyntaxError};

/// Result type for typesharing-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The taxonomy of schema validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Structure,
    TypeKind,
    EmptyProperties,
    MissingType,
    UnknownType,
    InvalidExtant,
    InvalidIdentifier,
    DuplicateField,
    InvalidDefault,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Structure => "StructureError",
            ErrorKind::TypeKind => "TypeKindError",
            ErrorKind::EmptyProperties => "EmptyPropertiesError",
            ErrorKind::MissingType => "MissingTypeError",
            ErrorKind::UnknownType => "UnknownTypeError",
            ErrorKind::InvalidExtant => "InvalidExtantError",
            ErrorKind::InvalidIdentifier => "InvalidIdentifierError",
            ErrorKind::DuplicateField => "DuplicateFieldError",
            ErrorKind::InvalidDefault => "InvalidDefaultError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A schema document that parsed but breaks a schema rule.
///
/// Every variant names the offending object type and, where one is involved,
/// the raw field name and the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("malformed schema document: {reason}")]
    Structure { reason: String },

    #[error("object type '{object}' must declare `type: Object`, found {found}")]
    TypeKind { object: String, found: String },

    #[error("object type '{object}' must declare a non-empty `properties` mapping")]
    EmptyProperties { object: String },

    #[error("field '{field}' of '{object}' does not declare a type")]
    MissingType { object: String, field: String },

    #[error("field '{field}' of '{object}' references unknown type '{name}'{}", declared_suffix(.name, .declared))]
    UnknownType {
        object: String,
        field: String,
        /// The unresolvable type name (the innermost `List` element, if nested).
        name: String,
        /// The full type string as declared.
        declared: String,
    },

    #[error("field '{field}' of '{object}' has invalid extant '{value}', expected 'missing'")]
    InvalidExtant {
        object: String,
        field: String,
        value: String,
    },

    #[error("{}", identifier_message(.object, .field.as_deref(), .reason))]
    InvalidIdentifier {
        object: String,
        /// Raw field name, or `None` when the object type name itself is invalid.
        field: Option<String>,
        reason: String,
    },

    #[error("field '{field}' of '{object}' collides with '{other}' ({form})")]
    DuplicateField {
        object: String,
        field: String,
        other: String,
        /// The generated form both names share.
        form: String,
    },

    #[error("field '{field}' of '{object}' has an invalid default: {reason}")]
    InvalidDefault {
        object: String,
        field: String,
        reason: String,
    },
}

fn declared_suffix(name: &str, declared: &str) -> String {
    if name == declared {
        String::new()
    } else {
        format!(" in '{declared}'")
    }
}

fn identifier_message(object: &str, field: Option<&str>, reason: &str) -> String {
    match field {
        Some(field) => format!("invalid field name '{field}' in '{object}': {reason}"),
        None => format!("invalid object type name '{object}': {reason}"),
    }
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Structure { .. } => ErrorKind::Structure,
            ValidationError::TypeKind { .. } => ErrorKind::TypeKind,
            ValidationError::EmptyProperties { .. } => ErrorKind::EmptyProperties,
            ValidationError::MissingType { .. } => ErrorKind::MissingType,
            ValidationError::UnknownType { .. } => ErrorKind::UnknownType,
            ValidationError::InvalidExtant { .. } => ErrorKind::InvalidExtant,
            ValidationError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            ValidationError::DuplicateField { .. } => ErrorKind::DuplicateField,
            ValidationError::InvalidDefault { .. } => ErrorKind::InvalidDefault,
        }
    }

    /// The object type the error belongs to, if any.
    pub fn object(&self) -> Option<&str> {
        match self {
            ValidationError::Structure { .. } => None,
            ValidationError::TypeKind { object, .. }
            | ValidationError::EmptyProperties { object }
            | ValidationError::MissingType { object, .. }
            | ValidationError::UnknownType { object, .. }
            | ValidationError::InvalidExtant { object, .. }
            | ValidationError::InvalidIdentifier { object, .. }
            | ValidationError::DuplicateField { object, .. }
            | ValidationError::InvalidDefault { object, .. } => Some(object),
        }
    }

    /// The raw field name the error belongs to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Structure { .. }
            | ValidationError::TypeKind { .. }
            | ValidationError::EmptyProperties { .. } => None,
            ValidationError::InvalidIdentifier { field, .. } => field.as_deref(),
            ValidationError::MissingType { field, .. }
            | ValidationError::UnknownType { field, .. }
            | ValidationError::InvalidExtant { field, .. }
            | ValidationError::DuplicateField { field, .. }
            | ValidationError::InvalidDefault { field, .. } => Some(field),
        }
    }

    /// Short text for the source label.
    pub fn label(&self) -> &'static str {
        match self {
            ValidationError::Structure { .. } => "malformed document",
            ValidationError::TypeKind { .. } => "not an Object type",
            ValidationError::EmptyProperties { .. } => "no properties",
            ValidationError::MissingType { .. } => "missing type",
            ValidationError::UnknownType { .. } => "unknown type",
            ValidationError::InvalidExtant { .. } => "invalid extant",
            ValidationError::InvalidIdentifier { .. } => "invalid name",
            ValidationError::DuplicateField { .. } => "duplicate field",
            ValidationError::InvalidDefault { .. } => "invalid default",
        }
    }

    /// A suggestion for fixing the document.
    pub fn help(&self) -> Option<String> {
        match self {
            ValidationError::Structure { .. } => Some(
                "a schema document maps type names to `{ type: Object, properties: {...} }`"
                    .to_string(),
            ),
            ValidationError::TypeKind { .. } => {
                Some("only `type: Object` definitions are supported".to_string())
            }
            ValidationError::EmptyProperties { .. } => {
                Some("declare at least one field under `properties`".to_string())
            }
            ValidationError::MissingType { .. } => {
                Some("add a `type`, e.g. `type: String` or `type: List<Item>`".to_string())
            }
            ValidationError::UnknownType { name, .. } => Some(format!(
                "valid types are String, Integer, Decimal, Boolean, Date, Null, List<T>, or an object type declared in this document; define '{name}' or fix the spelling"
            )),
            ValidationError::InvalidExtant { .. } => {
                Some("the only accepted value is `extant: missing`".to_string())
            }
            ValidationError::InvalidIdentifier { field, .. } => Some(match field {
                Some(_) => "use only letters, numbers, and underscores, starting with a letter or underscore; a single trailing `?` marks a nullable field".to_string(),
                None => "use only letters, numbers, and underscores, starting with a letter or underscore, and avoid names reserved by the generated code".to_string(),
            }),
            ValidationError::DuplicateField { .. } => {
                Some("rename one of the fields so the generated names stay distinct".to_string())
            }
            ValidationError::InvalidDefault { .. } => None,
        }
    }

    /// Names leading to the offending text, outermost first, for span lookup.
    pub(crate) fn locator(&self) -> Vec<&str> {
        let mut path: Vec<&str> = self.object().into_iter().collect();
        if let Some(field) = self.field() {
            path.push(field);
        }
        match self {
            ValidationError::UnknownType { name, .. } => path.push(name),
            ValidationError::InvalidExtant { value, .. } => path.push(value),
            _ => {}
        }
        path
    }
}

/// Source context for error reporting.
///
/// Carries the source content and filename so parse and validation failures
/// can be turned into source-annotated diagnostics.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a notation syntax error.
    pub fn parse_error(&self, format: SourceFormat, error: SyntaxError) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span: error.span.map(SourceSpan::from),
            format,
            message: error.message,
        })
    }

    /// Create a validation error, locating the offending text on a best-effort basis.
    pub fn validation_error(&self, error: ValidationError) -> Box<Error> {
        let span = find_path_span(&self.src, &error.locator());
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            label: error.label().to_string(),
            help: error.help(),
            error,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(typesharing::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported schema file '{path}'")]
    #[diagnostic(
        code(typesharing::unsupported_format),
        help("schema files must end in .yaml, .yml, .json or .toml")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse {format} schema")]
    #[diagnostic(code(typesharing::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        format: SourceFormat,
        message: String,
    },

    #[error("{error}")]
    #[diagnostic(code(typesharing::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{label}")]
        span: Option<SourceSpan>,
        label: String,
        #[help]
        help: Option<String>,
        error: ValidationError,
    },
}

impl Error {
    /// The schema rule violation, if this is a validation failure.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Find each name in turn, each search starting after the previous match.
///
/// Returns the span of the deepest name found. Names only match as whole
/// words so that `Item` does not match inside `Items`.
pub(crate) fn find_path_span(src: &str, path: &[&str]) -> Option<SourceSpan> {
    let mut from = 0;
    let mut found = None;
    for name in path {
        if let Some(pos) = find_word(src, name, from) {
            found = Some(SourceSpan::from((pos, name.len())));
            from = pos + name.len();
        }
    }
    found
}

fn find_word(src: &str, name: &str, from: usize) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let mut start = from;
    while let Some(offset) = src.get(start..).and_then(|rest| rest.find(name)) {
        let pos = start + offset;
        let end = pos + name.len();
        let before = src[..pos].chars().next_back();
        let after = src[end..].chars().next();
        if !before.is_some_and(is_word) && !after.is_some_and(|c| is_word(c) || c == '?') {
            return Some(pos);
        }
        start = pos + name.len();
    }
    None
}
