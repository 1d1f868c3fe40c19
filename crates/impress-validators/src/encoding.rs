//! Encoded payloads and markup detection
//!
//! `is_url_encoded`, `is_html_encoded` and `is_html` look for a match
//! anywhere in the input. The others must match the whole string.

use crate::patterns::{BASE64, BASE64_URL, DATA_URI_HEADER, HTML, HTML_ENCODED, URL_ENCODED};

/// Standard base64 with `=` padding
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_base64(input: &str) -> bool {
    BASE64.is_match(input)
}

/// URL-safe base64 alphabet (`-` and `_`) with `=` padding
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_base64_url(input: &str) -> bool {
    BASE64_URL.is_match(input)
}

/// Check whether a string is a base64 `data:` URI.
///
/// The input is split at the first comma. The header must be `data:` with an
/// optional media type and parameters, the payload must be base64.
///
/// # Examples
/// ```
/// use impress_validators::is_data_uri;
/// assert!(is_data_uri("data:text/plain;base64,SGVsbG8sIFdvcmxkIQ=="));
/// assert!(!is_data_uri("data:text/plain;base64"));
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_data_uri(input: &str) -> bool {
    match input.split_once(',') {
        Some((header, payload)) => DATA_URI_HEADER.is_match(header) && BASE64.is_match(payload),
        None => false,
    }
}

/// Contains a `%XX` percent escape
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_url_encoded(input: &str) -> bool {
    URL_ENCODED.is_match(input)
}

/// Contains an HTML character reference (`&#x3c;`, `&lt;`, `&amp;`, ...)
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_html_encoded(input: &str) -> bool {
    HTML_ENCODED.is_match(input)
}

/// Contains an opening or closing HTML tag
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_html(input: &str) -> bool {
    HTML.is_match(input)
}
