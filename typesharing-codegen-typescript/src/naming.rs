//! TypeScript-specific naming conventions.

use typesharing_codegen::NamingConvention;
use typesharing_core::to_camel_case;

fn keep_name(name: &str) -> String {
    name.to_string()
}

/// TypeScript naming conventions.
///
/// Keywords are legal property names, so nothing is reserved.
pub const TS_NAMING: NamingConvention = NamingConvention {
    field_to_name: to_camel_case,
    reserved_words: &[],
    escape_reserved: keep_name,
};
