//! Python type mapper implementation.

use typesharing_codegen::TypeMapper;
use typesharing_ir::ScalarType;

/// Python type mapper implementation.
///
/// Maps to `typing` generics so the output works on every Python 3 release
/// that supports dataclasses.
pub struct PythonTypeMapper;

impl TypeMapper for PythonTypeMapper {
    fn language(&self) -> &'static str {
        "python"
    }

    fn map_scalar(&self, scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::String => "str",
            ScalarType::Integer => "int",
            ScalarType::Decimal => "Decimal",
            ScalarType::Boolean => "bool",
            ScalarType::Date => "date",
            ScalarType::Null => "None",
        }
    }

    fn wrap_list(&self, inner: String) -> String {
        format!("List[{}]", inner)
    }

    fn wrap_nullable(&self, ty: String) -> String {
        format!("Optional[{}]", ty)
    }

    fn wrap_possibly_absent(&self, ty: String, nullable: bool) -> String {
        if nullable {
            format!("Union[{}, None, MissingType]", ty)
        } else {
            format!("Union[{}, MissingType]", ty)
        }
    }
}
