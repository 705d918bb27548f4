//! Shared naming utilities.

/// Convert a string to snake_case (e.g., "ticketNumber" -> "ticket_number").
///
/// Every uppercase character except a leading one starts a new word, so
/// acronyms split per letter ("HTTPCode" -> "h_t_t_p_code"). Names that are
/// already snake_case pass through unchanged.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a string to camelCase (e.g., "ticket_number" -> "ticketNumber").
///
/// The first word is kept as written and every following word gets an
/// uppercase first letter. Leading underscores are preserved so private-style
/// names stay distinguishable ("_internal_id" -> "_internalId").
pub fn to_camel_case(s: &str) -> String {
    let body = s.trim_start_matches('_');
    let mut result: String = s[..s.len() - body.len()].to_string();

    let mut words = body.split('_');
    if let Some(first) = words.next() {
        result.push_str(first);
    }
    for word in words {
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            result.extend(c.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Check that a name is an ASCII identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check that a string is a decimal literal such as `12`, `-0.50`, `.5` or `1e-3`.
///
/// Accepts exactly the finite forms Python's `Decimal` constructor accepts;
/// `NaN` and `Infinity` are rejected.
pub fn is_decimal_literal(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`) into year, month and day.
///
/// Returns `None` unless the string names a real day of the proleptic
/// Gregorian calendar.
pub fn parse_iso_date(s: &str) -> Option<(u32, u32, u32)> {
    let bytes = s.as_bytes();
    if !s.is_ascii() || bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let number = |range: std::ops::Range<usize>| -> Option<u32> {
        let part = &s[range];
        if part.bytes().all(|b| b.is_ascii_digit()) {
            part.parse().ok()
        } else {
            None
        }
    };

    let year = number(0..4)?;
    let month = number(5..7)?;
    let day = number(8..10)?;

    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        2 => 28,
        _ => return None,
    };

    (year >= 1 && (1..=days_in_month).contains(&day)).then_some((year, month, day))
}
