//! Type references.

use std::{
    fmt,
    hash::{Hash, Hasher},
    mem,
};

use serde::{Serialize, Serializer};

/// Scalar types supported by the schema language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Integer,
    /// Exact decimal number. Targets must not lower this to a binary float.
    Decimal,
    Boolean,
    /// Calendar date without a time component.
    Date,
    Null,
}

impl ScalarType {
    /// Every scalar, in schema documentation order.
    pub const ALL: [ScalarType; 6] = [
        ScalarType::String,
        ScalarType::Integer,
        ScalarType::Decimal,
        ScalarType::Boolean,
        ScalarType::Date,
        ScalarType::Null,
    ];

    /// Get the schema type name (as written in schema documents).
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "String",
            ScalarType::Integer => "Integer",
            ScalarType::Decimal => "Decimal",
            ScalarType::Boolean => "Boolean",
            ScalarType::Date => "Date",
            ScalarType::Null => "Null",
        }
    }

    /// Look up a scalar by its schema type name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to a field's type.
///
/// Lists nest without limit. Every walk over the nesting, including clone,
/// comparison and drop, is iterative so arbitrarily deep `List<List<...>>`
/// chains never exhaust the stack.
pub enum TypeRef {
    /// One of the built-in scalars.
    Scalar(ScalarType),
    /// `List<T>`.
    List(Box<TypeRef>),
    /// Another object type declared in the same document.
    Named(String),
}

impl TypeRef {
    /// Create a scalar type reference.
    pub fn scalar(scalar: ScalarType) -> Self {
        Self::Scalar(scalar)
    }

    /// Create a list type reference.
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wrap `leaf` in `depth` levels of `List<...>`.
    pub fn nested_list(leaf: TypeRef, depth: usize) -> Self {
        (0..depth).fold(leaf, |inner, _| Self::list(inner))
    }

    /// Number of `List<...>` wrappers around the innermost type.
    pub fn list_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Self::List(inner) = current {
            depth += 1;
            current = inner;
        }
        depth
    }

    /// The innermost non-list type.
    pub fn leaf(&self) -> &TypeRef {
        let mut current = self;
        while let Self::List(inner) = current {
            current = inner;
        }
        current
    }

    /// The element type if this is a list.
    pub fn element(&self) -> Option<&TypeRef> {
        match self {
            Self::List(inner) => Some(inner),
            _ => None,
        }
    }

    /// The scalar at the bottom of the nesting, if any.
    pub fn leaf_scalar(&self) -> Option<ScalarType> {
        match self.leaf() {
            Self::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }

    /// The object type name at the bottom of the nesting, if any.
    pub fn leaf_name(&self) -> Option<&str> {
        match self.leaf() {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if this is a list at the top level.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// A copy of the innermost non-list type.
    fn leaf_copy(&self) -> Self {
        match self.leaf() {
            Self::Scalar(scalar) => Self::Scalar(*scalar),
            Self::Named(name) => Self::Named(name.clone()),
            Self::List(_) => unreachable!("leaf() never returns a list"),
        }
    }
}

impl Clone for TypeRef {
    fn clone(&self) -> Self {
        Self::nested_list(self.leaf_copy(), self.list_depth())
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.list_depth() == other.list_depth()
            && match (self.leaf(), other.leaf()) {
                (Self::Scalar(a), Self::Scalar(b)) => a == b,
                (Self::Named(a), Self::Named(b)) => a == b,
                _ => false,
            }
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.list_depth().hash(state);
        match self.leaf() {
            Self::Scalar(scalar) => scalar.hash(state),
            Self::Named(name) => name.hash(state),
            Self::List(_) => {}
        }
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.list_depth();
        for _ in 0..depth {
            f.write_str("List(")?;
        }
        match self.leaf() {
            Self::Scalar(scalar) => write!(f, "Scalar({scalar:?})")?,
            Self::Named(name) => write!(f, "Named({name:?})")?,
            Self::List(_) => unreachable!("leaf() never returns a list"),
        }
        for _ in 0..depth {
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl Drop for TypeRef {
    fn drop(&mut self) {
        let Self::List(inner) = self else {
            return;
        };
        // Unlink one level at a time; each dropped box then holds a scalar.
        let mut next = mem::replace(&mut **inner, Self::Scalar(ScalarType::Null));
        while let Self::List(inner) = &mut next {
            let rest = mem::replace(&mut **inner, Self::Scalar(ScalarType::Null));
            next = rest;
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.list_depth();
        for _ in 0..depth {
            f.write_str("List<")?;
        }
        match self.leaf() {
            Self::Scalar(scalar) => f.write_str(scalar.as_str())?,
            Self::Named(name) => f.write_str(name)?,
            Self::List(_) => unreachable!("leaf() never returns a list"),
        }
        for _ in 0..depth {
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl Serialize for TypeRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
