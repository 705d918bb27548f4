//! TypeScript type mapper implementation.

use typesharing_codegen::TypeMapper;
use typesharing_ir::ScalarType;

/// TypeScript type mapper implementation.
///
/// Decimals and dates travel as strings so no precision is lost in transit.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_scalar(&self, scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::String => "string",
            ScalarType::Integer => "number",
            ScalarType::Decimal => "string",
            ScalarType::Boolean => "boolean",
            ScalarType::Date => "string",
            ScalarType::Null => "null",
        }
    }

    fn wrap_list(&self, inner: String) -> String {
        format!("{}[]", inner)
    }

    fn wrap_nullable(&self, ty: String) -> String {
        format!("null | {}", ty)
    }

    /// The property itself is marked optional by the emitter.
    fn wrap_possibly_absent(&self, ty: String, _nullable: bool) -> String {
        format!("null | undefined | {}", ty)
    }
}
