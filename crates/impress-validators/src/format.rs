//! Named formats and dispatch
//!
//! Every predicate in the crate has a [`Format`] variant with a stable
//! kebab-case name, so callers holding a format name (CLI arguments, config
//! files, FFI) can validate without matching on strings themselves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidatorError;
use crate::{color, encoding, eth, geo, identifiers, isbn, network, text};

/// A string format that can be validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    Empty,
    Alpha,
    AlphaNumeric,
    AlphaUnicode,
    AlphaUnicodeNumeric,
    Numeric,
    Number,
    Hexadecimal,
    Hexcolor,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Email,
    Base64,
    Base64Url,
    Isbn10,
    Isbn13,
    Uuid,
    Uuid3,
    Uuid4,
    Uuid5,
    UuidMixed,
    Uuid3Mixed,
    Uuid4Mixed,
    Uuid5Mixed,
    Ascii,
    PrintableAscii,
    Multibyte,
    DataUri,
    Latitude,
    Longitude,
    IpAddress,
    DomainName,
    BtcAddress,
    BtcAddressLower,
    BtcAddressUpper,
    EthAddress,
    EthAddressLower,
    EthAddressUpper,
    UrlEncoded,
    HtmlEncoded,
    Html,
}

impl Format {
    /// Get all formats
    pub fn all() -> &'static [Format] {
        &[
            Format::Empty,
            Format::Alpha,
            Format::AlphaNumeric,
            Format::AlphaUnicode,
            Format::AlphaUnicodeNumeric,
            Format::Numeric,
            Format::Number,
            Format::Hexadecimal,
            Format::Hexcolor,
            Format::Rgb,
            Format::Rgba,
            Format::Hsl,
            Format::Hsla,
            Format::Email,
            Format::Base64,
            Format::Base64Url,
            Format::Isbn10,
            Format::Isbn13,
            Format::Uuid,
            Format::Uuid3,
            Format::Uuid4,
            Format::Uuid5,
            Format::UuidMixed,
            Format::Uuid3Mixed,
            Format::Uuid4Mixed,
            Format::Uuid5Mixed,
            Format::Ascii,
            Format::PrintableAscii,
            Format::Multibyte,
            Format::DataUri,
            Format::Latitude,
            Format::Longitude,
            Format::IpAddress,
            Format::DomainName,
            Format::BtcAddress,
            Format::BtcAddressLower,
            Format::BtcAddressUpper,
            Format::EthAddress,
            Format::EthAddressLower,
            Format::EthAddressUpper,
            Format::UrlEncoded,
            Format::HtmlEncoded,
            Format::Html,
        ]
    }

    /// Stable kebab-case name, identical to the serde representation
    pub fn name(self) -> &'static str {
        match self {
            Format::Empty => "empty",
            Format::Alpha => "alpha",
            Format::AlphaNumeric => "alpha-numeric",
            Format::AlphaUnicode => "alpha-unicode",
            Format::AlphaUnicodeNumeric => "alpha-unicode-numeric",
            Format::Numeric => "numeric",
            Format::Number => "number",
            Format::Hexadecimal => "hexadecimal",
            Format::Hexcolor => "hexcolor",
            Format::Rgb => "rgb",
            Format::Rgba => "rgba",
            Format::Hsl => "hsl",
            Format::Hsla => "hsla",
            Format::Email => "email",
            Format::Base64 => "base64",
            Format::Base64Url => "base64-url",
            Format::Isbn10 => "isbn10",
            Format::Isbn13 => "isbn13",
            Format::Uuid => "uuid",
            Format::Uuid3 => "uuid3",
            Format::Uuid4 => "uuid4",
            Format::Uuid5 => "uuid5",
            Format::UuidMixed => "uuid-mixed",
            Format::Uuid3Mixed => "uuid3-mixed",
            Format::Uuid4Mixed => "uuid4-mixed",
            Format::Uuid5Mixed => "uuid5-mixed",
            Format::Ascii => "ascii",
            Format::PrintableAscii => "printable-ascii",
            Format::Multibyte => "multibyte",
            Format::DataUri => "data-uri",
            Format::Latitude => "latitude",
            Format::Longitude => "longitude",
            Format::IpAddress => "ip-address",
            Format::DomainName => "domain-name",
            Format::BtcAddress => "btc-address",
            Format::BtcAddressLower => "btc-address-lower",
            Format::BtcAddressUpper => "btc-address-upper",
            Format::EthAddress => "eth-address",
            Format::EthAddressLower => "eth-address-lower",
            Format::EthAddressUpper => "eth-address-upper",
            Format::UrlEncoded => "url-encoded",
            Format::HtmlEncoded => "html-encoded",
            Format::Html => "html",
        }
    }

    /// The predicate implementing this format
    pub fn predicate(self) -> fn(&str) -> bool {
        match self {
            Format::Empty => text::is_empty,
            Format::Alpha => text::is_alpha,
            Format::AlphaNumeric => text::is_alpha_numeric,
            Format::AlphaUnicode => text::is_alpha_unicode,
            Format::AlphaUnicodeNumeric => text::is_alpha_unicode_numeric,
            Format::Numeric => text::is_numeric,
            Format::Number => text::is_number,
            Format::Hexadecimal => text::is_hexadecimal,
            Format::Hexcolor => color::is_hexcolor,
            Format::Rgb => color::is_rgb,
            Format::Rgba => color::is_rgba,
            Format::Hsl => color::is_hsl,
            Format::Hsla => color::is_hsla,
            Format::Email => network::is_email,
            Format::Base64 => encoding::is_base64,
            Format::Base64Url => encoding::is_base64_url,
            Format::Isbn10 => isbn::is_isbn10,
            Format::Isbn13 => isbn::is_isbn13,
            Format::Uuid => identifiers::is_uuid,
            Format::Uuid3 => identifiers::is_uuid3,
            Format::Uuid4 => identifiers::is_uuid4,
            Format::Uuid5 => identifiers::is_uuid5,
            Format::UuidMixed => identifiers::is_uuid_mixed,
            Format::Uuid3Mixed => identifiers::is_uuid3_mixed,
            Format::Uuid4Mixed => identifiers::is_uuid4_mixed,
            Format::Uuid5Mixed => identifiers::is_uuid5_mixed,
            Format::Ascii => text::is_ascii,
            Format::PrintableAscii => text::is_printable_ascii,
            Format::Multibyte => text::is_multibyte,
            Format::DataUri => encoding::is_data_uri,
            Format::Latitude => geo::is_latitude,
            Format::Longitude => geo::is_longitude,
            Format::IpAddress => network::is_ip_address,
            Format::DomainName => network::is_domain_name,
            Format::BtcAddress => identifiers::is_btc_address,
            Format::BtcAddressLower => identifiers::is_btc_address_lower,
            Format::BtcAddressUpper => identifiers::is_btc_address_upper,
            Format::EthAddress => eth::is_eth_address,
            Format::EthAddressLower => eth::is_eth_address_lower,
            Format::EthAddressUpper => eth::is_eth_address_upper,
            Format::UrlEncoded => encoding::is_url_encoded,
            Format::HtmlEncoded => encoding::is_html_encoded,
            Format::Html => encoding::is_html,
        }
    }

    /// Run this format's predicate against `input`
    pub fn validate(self, input: &str) -> bool {
        (self.predicate())(input)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ValidatorError;

    /// Parse a format name. Underscores are accepted in place of hyphens and
    /// case is ignored, so `ETH_ADDRESS` and `eth-address` are the same.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Format::all()
            .iter()
            .copied()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| ValidatorError::UnknownFormat {
                name: s.to_string(),
            })
    }
}

/// Validate `input` against `format`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate(format: Format, input: &str) -> bool {
    format.validate(input)
}

/// Look up a format by name and validate `input` against it
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_named(format: &str, input: &str) -> Result<bool, ValidatorError> {
    let format: Format = format.parse()?;
    Ok(format.validate(input))
}
