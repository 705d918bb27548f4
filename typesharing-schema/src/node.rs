//! Format-agnostic document tree.
//!
//! Every supported notation is lowered into [`Node`] before validation, so
//! the validator never sees YAML, JSON or TOML specifics. Mapping order is
//! preserved because declaration order drives generated output order.

use std::fmt;

use indexmap::IndexMap;

/// A parsed value of a schema document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Node>),
    Mapping(IndexMap<String, Node>),
}

impl Node {
    /// Get the mapping entries if this is a mapping.
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Get the string if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a key if this is a mapping.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Get a short description of the node kind for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Boolean(_) => "boolean",
            Node::Integer(_) => "integer",
            Node::Float(_) => "float",
            Node::String(_) => "string",
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
        }
    }
}

/// Renders scalars as written and collections by kind, for error messages.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => f.write_str("null"),
            Node::Boolean(b) => write!(f, "{b}"),
            Node::Integer(i) => write!(f, "{i}"),
            Node::Float(x) => write!(f, "{x}"),
            Node::String(s) => f.write_str(s),
            Node::Sequence(_) => f.write_str("<sequence>"),
            Node::Mapping(_) => f.write_str("<mapping>"),
        }
    }
}

impl From<serde_yaml::Value> for Node {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Boolean(b),
            Value::Number(n) => number_node(n.as_i64(), n.as_f64()),
            Value::String(s) => Node::String(s),
            Value::Sequence(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Mapping(map) => Node::Mapping(
                map.into_iter()
                    .map(|(key, value)| (yaml_key(key), Node::from(value)))
                    .collect(),
            ),
            Value::Tagged(tagged) => Node::from(tagged.value),
        }
    }
}

/// Mapping keys are names; non-string YAML keys are rendered as written.
fn yaml_key(key: serde_yaml::Value) -> String {
    match Node::from(key) {
        Node::String(s) => s,
        node @ (Node::Null | Node::Boolean(_) | Node::Integer(_) | Node::Float(_)) => {
            node.to_string()
        }
        node => format!("<{}>", node.kind()),
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Boolean(b),
            Value::Number(n) => number_node(n.as_i64(), n.as_f64()),
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => {
                Node::Mapping(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

impl From<toml::Value> for Node {
    fn from(value: toml::Value) -> Self {
        use toml::Value;

        match value {
            Value::String(s) => Node::String(s),
            Value::Integer(i) => Node::Integer(i),
            Value::Float(x) => Node::Float(x),
            Value::Boolean(b) => Node::Boolean(b),
            Value::Datetime(dt) => Node::String(dt.to_string()),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Table(table) => Node::from(table),
        }
    }
}

impl From<toml::Table> for Node {
    fn from(table: toml::Table) -> Self {
        Node::Mapping(
            table
                .into_iter()
                .map(|(k, v)| (k, Node::from(v)))
                .collect(),
        )
    }
}

/// Integers that fit `i64` stay integers; anything wider degrades to a float.
fn number_node(as_i64: Option<i64>, as_f64: Option<f64>) -> Node {
    match (as_i64, as_f64) {
        (Some(i), _) => Node::Integer(i),
        (None, Some(x)) => Node::Float(x),
        (None, None) => Node::Null,
    }
}
