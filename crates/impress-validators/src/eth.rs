//! Ethereum address validation with EIP-55 checksums
//!
//! An address is `0x` followed by 40 hex digits. All-lowercase and
//! all-uppercase payloads carry no checksum and are accepted as they are.
//! Mixed-case payloads must match the EIP-55 casing derived from the
//! Keccak-256 hash of the lowercased payload.

use tiny_keccak::{Hasher, Keccak};

use crate::patterns::{ETH_ADDRESS, ETH_ADDRESS_LOWER, ETH_ADDRESS_UPPER};

/// Check whether a string is an Ethereum address with a valid checksum.
///
/// # Examples
/// ```
/// use impress_validators::is_eth_address;
/// assert!(is_eth_address("0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb"));
/// assert!(!is_eth_address("0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDB"));
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_eth_address(input: &str) -> bool {
    if !ETH_ADDRESS.is_match(input) {
        return false;
    }

    if is_eth_address_lower(input) || is_eth_address_upper(input) {
        return true;
    }

    let valid = has_valid_checksum(&input[2..]);
    if !valid {
        tracing::trace!(address = input, "EIP-55 checksum mismatch");
    }
    valid
}

/// Check whether a string is an all-lowercase Ethereum address.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_eth_address_lower(input: &str) -> bool {
    ETH_ADDRESS_LOWER.is_match(input)
}

/// Check whether a string is an all-uppercase Ethereum address.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_eth_address_upper(input: &str) -> bool {
    ETH_ADDRESS_UPPER.is_match(input)
}

/// Verify the EIP-55 casing of a 40 character hex payload (no `0x`).
///
/// Digits carry no case and are skipped. A letter must be uppercase when the
/// hash nibble at the same position is 8 or above, lowercase otherwise.
pub(crate) fn has_valid_checksum(payload: &str) -> bool {
    let hash = keccak256_hex(&payload.to_ascii_lowercase());

    payload
        .chars()
        .zip(hash.chars())
        .filter(|(c, _)| !c.is_ascii_digit())
        .all(|(c, nibble)| match nibble.to_digit(16) {
            Some(n) if n >= 8 => c.is_ascii_uppercase(),
            Some(_) => c.is_ascii_lowercase(),
            None => false,
        })
}

/// Keccak-256 digest of the input bytes as lowercase hex.
fn keccak256_hex(input: &str) -> String {
    let mut hasher = Keccak::v256();
    let mut digest = [0u8; 32];
    hasher.update(input.as_bytes());
    hasher.finalize(&mut digest);
    hex::encode(digest)
}
