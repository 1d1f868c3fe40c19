//! ISBN-10 and ISBN-13 validation
//!
//! Both formats accept hyphens and spaces as separators. Separators are
//! stripped first, then the cleaned sequence has to pass the grammar and the
//! check digit arithmetic.

use crate::patterns::{ISBN10, ISBN13};

/// Check whether a string is a valid ISBN-10.
///
/// The final character may be an uppercase `X`, standing for the value 10.
///
/// # Examples
/// ```
/// use impress_validators::is_isbn10;
/// assert!(is_isbn10("3836221195"));
/// assert!(is_isbn10("3 401 01319 X"));
/// assert!(!is_isbn10("3423214121"));
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_isbn10(input: &str) -> bool {
    let cleaned = strip_separators(input);
    if !ISBN10.is_match(&cleaned) {
        return false;
    }

    let valid = isbn10_checksum_matches(cleaned.as_bytes());
    if !valid {
        tracing::trace!(isbn = %cleaned, "ISBN-10 check digit mismatch");
    }
    valid
}

/// Check whether a string is a valid ISBN-13 with a 978 or 979 prefix.
///
/// # Examples
/// ```
/// use impress_validators::is_isbn13;
/// assert!(is_isbn13("978-3-8362-2119-1"));
/// assert!(!is_isbn13("3-8362-2119-5"));
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_isbn13(input: &str) -> bool {
    let cleaned = strip_separators(input);
    if !ISBN13.is_match(&cleaned) {
        return false;
    }

    let valid = isbn13_checksum_matches(cleaned.as_bytes());
    if !valid {
        tracing::trace!(isbn = %cleaned, "ISBN-13 check digit mismatch");
    }
    valid
}

/// Remove hyphens and spaces
fn strip_separators(input: &str) -> String {
    input.chars().filter(|c| *c != '-' && *c != ' ').collect()
}

/// Numeric value of an ASCII digit, or 10 for the ISBN-10 `X`.
fn digit_value(b: u8) -> u32 {
    match b {
        b'X' => 10,
        _ => u32::from(b.wrapping_sub(b'0')),
    }
}

/// Weighted ISBN-10 sum: position i (1-based) times its digit, modulo 11.
///
/// Expects ten bytes that already passed the ISBN-10 grammar.
pub(crate) fn isbn10_checksum_matches(cleaned: &[u8]) -> bool {
    if cleaned.len() != 10 {
        return false;
    }

    let sum: u32 = cleaned
        .iter()
        .enumerate()
        .map(|(i, &b)| (i as u32 + 1) * digit_value(b))
        .sum();

    sum % 11 == 0
}

/// ISBN-13 check digit: weights 1,3,1,3,... over the first twelve digits.
///
/// Expects thirteen bytes that already passed the ISBN-13 grammar.
pub(crate) fn isbn13_checksum_matches(cleaned: &[u8]) -> bool {
    if cleaned.len() != 13 {
        return false;
    }

    let sum: u32 = cleaned[..12]
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let value = digit_value(b);
            if i % 2 == 0 {
                value
            } else {
                value * 3
            }
        })
        .sum();

    let expected = (10 - sum % 10) % 10;
    digit_value(cleaned[12]) == expected
}
