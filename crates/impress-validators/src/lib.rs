// Allow manual modulo checks since .is_multiple_of() is nightly-only
#![allow(clippy::manual_is_multiple_of)]

//! String format predicates for untrusted input
//!
//! Every predicate takes a `&str` and answers one yes/no question:
//! - Checksum-validated identifiers: ISBN-10, ISBN-13, EIP-55 Ethereum addresses
//! - Text classes: alpha, numeric, hexadecimal, ASCII, multibyte
//! - Colors: hex, RGB(A), HSL(A)
//! - Encodings: base64, data URIs, URL and HTML escapes, HTML tags
//! - Network: email, IP address, domain name
//! - UUIDs, Bitcoin addresses, latitude/longitude
//!
//! Grammars are compiled once on first use and shared between threads.
//! Nothing is parsed or normalized; malformed input is simply `false`.

pub mod color;
pub mod encoding;
pub mod error;
pub mod eth;
pub mod format;
pub mod geo;
pub mod identifiers;
pub mod isbn;
pub mod network;
mod patterns;
pub mod text;

pub use color::*;
pub use encoding::*;
pub use error::*;
pub use eth::*;
pub use format::*;
pub use geo::*;
pub use identifiers::*;
pub use isbn::*;
pub use network::*;
pub use text::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
