//! Locale-independent ASCII classification and case folding.
//!
//! These are deliberately ASCII-only: results never depend on the process
//! locale, and bytes outside the ASCII range pass through untouched. Used
//! by [`Str`](crate::text::Str) comparisons and the codec layer.

/// Returns `true` if `c` is an alphabetic character (`[A-Za-z]`).
pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns `true` if `c` is a decimal digit (`[0-9]`).
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` if `c` is alphanumeric (`[A-Za-z0-9]`).
pub fn is_alnum(c: u8) -> bool {
    c.is_ascii_alphanumeric()
}

/// Returns `true` if `c` is whitespace: space, tab, newline, vertical tab,
/// form feed, or carriage return.
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Returns `true` if `c` is an uppercase letter (`[A-Z]`).
pub fn is_upper(c: u8) -> bool {
    c.is_ascii_uppercase()
}

/// Returns `true` if `c` is a lowercase letter (`[a-z]`).
pub fn is_lower(c: u8) -> bool {
    c.is_ascii_lowercase()
}

/// Returns `true` if `c` is a hexadecimal digit (`[0-9A-Fa-f]`).
pub fn is_xdigit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

/// Converts `c` to uppercase if it is an ASCII lowercase letter.
pub fn to_upper(c: u8) -> u8 {
    c.to_ascii_uppercase()
}

/// Converts `c` to lowercase if it is an ASCII uppercase letter.
pub fn to_lower(c: u8) -> u8 {
    c.to_ascii_lowercase()
}

/// Byte-wise equality under ASCII case folding.
///
/// Non-ASCII bytes must match exactly.
pub fn eq_ignore_case(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(&x, &y)| to_lower(x) == to_lower(y))
}
