//! Email addresses, IP addresses and domain names

use crate::patterns::{DOMAIN_NAME, EMAIL, IP_ADDRESS};

/// Check whether a string is an email address.
///
/// Accepts dot-atom and quoted local parts and internationalized characters
/// in both the local part and the domain.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_email(input: &str) -> bool {
    EMAIL.is_match(input)
}

/// Check whether a string is an IPv4 or IPv6 address.
///
/// Surrounding ASCII whitespace is tolerated. IPv6 may embed an IPv4 tail
/// and carry a `%zone` suffix.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_ip_address(input: &str) -> bool {
    IP_ADDRESS.is_match(input)
}

/// Check whether a string is a relative domain name with an alphabetic TLD.
///
/// Fully qualified (dot-terminated) names are rejected.
///
/// # Examples
/// ```
/// use impress_validators::is_domain_name;
/// assert!(is_domain_name("test.example.com"));
/// assert!(!is_domain_name("test.example.com."));
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_domain_name(input: &str) -> bool {
    let last_label_present = input
        .rsplit('.')
        .next()
        .is_some_and(|label| !label.is_empty());

    last_label_present && DOMAIN_NAME.is_match(input)
}
