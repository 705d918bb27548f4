//! Python-specific naming conventions.

use typesharing_codegen::NamingConvention;
use typesharing_core::{PYTHON_RESERVED, escape_python_name, to_snake_case};

/// Python naming conventions.
///
/// Besides keywords, a field may not shadow a name the generated module
/// imports or declares, nor a builtin used in annotations or defaults.
pub const PY_NAMING: NamingConvention = NamingConvention {
    field_to_name: to_snake_case,
    reserved_words: PYTHON_RESERVED,
    escape_reserved: escape_python_name,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_naming_field() {
        assert_eq!(PY_NAMING.field_name("ticketNumber"), "ticket_number");
        assert_eq!(PY_NAMING.field_name("promoCode?"), "promo_code");
        assert_eq!(PY_NAMING.field_name("email"), "email");
    }

    #[test]
    fn test_python_reserved_words() {
        assert!(PY_NAMING.is_reserved("class"));
        assert!(PY_NAMING.is_reserved("None"));
        assert!(PY_NAMING.is_reserved("field"));
        assert!(!PY_NAMING.is_reserved("amount"));
    }

    #[test]
    fn test_python_escape_reserved() {
        assert_eq!(PY_NAMING.field_name("from"), "from_");
        assert_eq!(PY_NAMING.field_name("date?"), "date_");
        assert_eq!(PY_NAMING.field_name("lambda"), "lambda_");
        assert_eq!(PY_NAMING.field_name("str"), "str_");
        assert_eq!(PY_NAMING.field_name("list"), "list_");
    }

    #[test]
    fn test_python_naming_agrees_with_validator_names() {
        for name in ["ticketNumber", "Date", "list?", "from", "date_", "amount"] {
            let bare = name.strip_suffix('?').unwrap_or(name);
            assert_eq!(PY_NAMING.field_name(name), typesharing_core::python_field_name(bare));
        }
    }
}
