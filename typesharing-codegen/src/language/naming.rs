//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Type names are emitted verbatim by every target; only field names are
/// transformed.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a field name to the language's casing (e.g., "ticketNumber" -> "ticket_number")
    pub field_to_name: fn(&str) -> String,
    /// Names a generated field may not take as-is
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "class_" in Python)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform a raw schema field name and make it safe for use.
    ///
    /// A trailing `?` (the nullable marker) is stripped first.
    pub fn field_name(&self, raw_name: &str) -> String {
        let name = raw_name.strip_suffix('?').unwrap_or(raw_name);
        let transformed = (self.field_to_name)(name);
        self.safe_name(&transformed)
    }
}

#[cfg(test)]
mod tests {
    use typesharing_core::to_snake_case;

    use super::*;

    const SNAKE: NamingConvention = NamingConvention {
        field_to_name: to_snake_case,
        reserved_words: &["class", "from"],
        escape_reserved: |name| format!("{name}_"),
    };

    #[test]
    fn test_field_name() {
        assert_eq!(SNAKE.field_name("ticketNumber"), "ticket_number");
        assert_eq!(SNAKE.field_name("promoCode?"), "promo_code");
        assert_eq!(SNAKE.field_name("class"), "class_");
        assert_eq!(SNAKE.field_name("from?"), "from_");
    }

    #[test]
    fn test_is_reserved() {
        assert!(SNAKE.is_reserved("class"));
        assert!(!SNAKE.is_reserved("klass"));
        assert_eq!(SNAKE.safe_name("klass"), "klass");
    }
}
