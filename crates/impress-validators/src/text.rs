//! Character-class predicates for plain text

use crate::patterns::{
    ALPHA, ALPHA_NUMERIC, ALPHA_UNICODE, ALPHA_UNICODE_NUMERIC, ASCII, HEXADECIMAL, MULTIBYTE,
    NUMBER, NUMERIC, PRINTABLE_ASCII,
};

/// Check whether a string is empty or only whitespace
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_empty(input: &str) -> bool {
    input.trim().is_empty()
}

/// ASCII letters only
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_alpha(input: &str) -> bool {
    ALPHA.is_match(input)
}

/// ASCII letters and digits only
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_alpha_numeric(input: &str) -> bool {
    ALPHA_NUMERIC.is_match(input)
}

/// Letters from any script
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_alpha_unicode(input: &str) -> bool {
    ALPHA_UNICODE.is_match(input)
}

/// Letters and numbers from any script
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_alpha_unicode_numeric(input: &str) -> bool {
    ALPHA_UNICODE_NUMERIC.is_match(input)
}

/// Signed integer or decimal, e.g. `-12.5`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_numeric(input: &str) -> bool {
    NUMERIC.is_match(input)
}

/// Unsigned run of ASCII digits
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_number(input: &str) -> bool {
    NUMBER.is_match(input)
}

/// Hex digits with an optional `0x`/`0X` prefix
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_hexadecimal(input: &str) -> bool {
    HEXADECIMAL.is_match(input)
}

/// Only 7-bit ASCII. The empty string qualifies.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_ascii(input: &str) -> bool {
    ASCII.is_match(input)
}

/// Only printable ASCII (space through `~`). The empty string qualifies.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_printable_ascii(input: &str) -> bool {
    PRINTABLE_ASCII.is_match(input)
}

/// Contains at least one character outside ASCII
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_multibyte(input: &str) -> bool {
    MULTIBYTE.is_match(input)
}
