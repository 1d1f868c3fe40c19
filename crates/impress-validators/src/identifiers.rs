//! UUID shapes and Bitcoin addresses
//!
//! The plain UUID predicates require lowercase hex, the `_mixed` variants
//! accept either case. None of them decode the value.

use crate::patterns::{
    BTC_ADDRESS, BTC_ADDRESS_LOWER, BTC_ADDRESS_UPPER, UUID, UUID3, UUID3_MIXED, UUID4,
    UUID4_MIXED, UUID5, UUID5_MIXED, UUID_MIXED,
};

/// Any lowercase 8-4-4-4-12 UUID
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_uuid(input: &str) -> bool {
    UUID.is_match(input)
}

/// Lowercase version 3 UUID
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_uuid3(input: &str) -> bool {
    UUID3.is_match(input)
}

/// Lowercase version 4 UUID with an RFC 4122 variant
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_uuid4(input: &str) -> bool {
    UUID4.is_match(input)
}

/// Lowercase version 5 UUID with an RFC 4122 variant
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_uuid5(input: &str) -> bool {
    UUID5.is_match(input)
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_uuid_mixed(input: &str) -> bool {
    UUID_MIXED.is_match(input)
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_uuid3_mixed(input: &str) -> bool {
    UUID3_MIXED.is_match(input)
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_uuid4_mixed(input: &str) -> bool {
    UUID4_MIXED.is_match(input)
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_uuid5_mixed(input: &str) -> bool {
    UUID5_MIXED.is_match(input)
}

/// Legacy base58 address (P2PKH `1...` or P2SH `3...`)
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_btc_address(input: &str) -> bool {
    BTC_ADDRESS.is_match(input)
}

/// Lowercase bech32 address (`bc1...`)
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_btc_address_lower(input: &str) -> bool {
    BTC_ADDRESS_LOWER.is_match(input)
}

/// Uppercase bech32 address (`BC1...`)
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_btc_address_upper(input: &str) -> bool {
    BTC_ADDRESS_UPPER.is_match(input)
}
