//! Names generated code may not use as written.

use crate::to_snake_case;

/// Names a generated Python attribute may not take.
///
/// Besides keywords this covers every name a generated module imports or
/// declares and the builtins its annotations and default expressions use.
pub const PYTHON_RESERVED: &[&str] = &[
    // keywords
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
    // module-level names of generated files
    "Decimal", "List", "MissingType", "Optional", "Union", "annotations", "dataclass", "date",
    "field",
    // builtins used in annotations and default factories
    "bool", "int", "list", "str",
];

/// Escape a reserved Python name with a trailing underscore.
pub fn escape_python_name(name: &str) -> String {
    format!("{}_", name)
}

/// The Python attribute name of a field, given its name without the `?` marker.
pub fn python_field_name(name: &str) -> String {
    let snake = to_snake_case(name);
    if PYTHON_RESERVED.contains(&snake.as_str()) {
        escape_python_name(&snake)
    } else {
        snake
    }
}
