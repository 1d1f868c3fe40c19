//! Predicate integration tests
//!
//! Case tables for the public predicates, including the cases from the
//! original validator test suite.

use impress_validators::{
    is_domain_name, is_empty, is_eth_address, is_html, is_html_encoded, is_ip_address, is_isbn10,
    is_isbn13, is_url_encoded, validate_named, Format,
};
use rstest::rstest;

/// Mixed-case addresses from the EIP-55 reference list
const CHECKSUMMED: &[&str] = &[
    "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
    "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
    "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
    "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
];

// === ISBN ===

#[rstest]
#[case("3836221195", true)]
#[case("3-8362-2119-5", true)]
#[case("3 8362 2119 5", true)]
#[case("1-61729-085-8", true)]
#[case("3 423 21412 0", true)]
#[case("3 401 01319 X", true)]
#[case("3423214121", false)]
#[case("978-3836221191", false)]
#[case("3-423-21412-1", false)]
#[case("3 401 01319 x", false)]
#[case("", false)]
#[case("foo", false)]
fn test_is_isbn10(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_isbn10(input), expected, "input: {:?}", input);
}

#[rstest]
#[case("9784873113685", true)]
#[case("978-4-87311-368-5", true)]
#[case("978 3401013190", true)]
#[case("978-3-8362-2119-1", true)]
#[case("9784873113686", false)]
#[case("978-4-87311-368-6", false)]
#[case("978 3401013191", false)]
#[case("3-8362-2119-5", false)]
#[case("", false)]
#[case("foo", false)]
fn test_is_isbn13(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_isbn13(input), expected, "input: {:?}", input);
}

// === Ethereum ===

#[rstest]
#[case("0x52908400098527886E0F7030069857D2E4169EE7", true)]
#[case("0x8617E340B3D01FA5F11F306F4090FD50E238070D", true)]
#[case("0xde709f2102306220921060314715629080e2fb77", true)]
#[case("0x27b1fdb04752bbc536007a920d24acb045561c26", true)]
#[case("0x123f681646d4a755815f9cb19e1acc8565a0c2ac", true)]
#[case("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed", true)]
#[case("0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359", true)]
#[case("0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB", true)]
#[case("0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb", true)]
#[case("0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDB", false)] // Invalid checksum
#[case("", false)]
#[case("D1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb", false)] // Missing 0x
#[case("0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDbc", false)] // 41 hex digits
#[case("0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aD", false)] // 39 hex digits
#[case("0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDw", false)] // Non-hex "w"
fn test_is_eth_address(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_eth_address(input), expected, "input: {:?}", input);
}

#[test]
fn test_eth_single_case_flip_breaks_checksum() {
    for address in CHECKSUMMED {
        assert!(is_eth_address(address), "{} should be valid", address);

        for (i, c) in address.char_indices().skip(2) {
            if !c.is_ascii_alphabetic() {
                continue;
            }
            let flipped_char = if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            };
            let mut flipped = address.to_string();
            flipped.replace_range(i..i + 1, &flipped_char.to_string());

            assert!(
                !is_eth_address(&flipped),
                "flipping position {} of {} should break the checksum",
                i,
                address
            );
        }
    }
}

// === Text and markup ===

#[rstest]
#[case("asdas", false)]
#[case("", true)]
#[case("   ", true)]
fn test_is_empty(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_empty(input), expected);
}

#[rstest]
#[case("<html>", true)]
#[case("</script>", true)]
#[case("<stillworks>", true)]
#[case("</html", false)]
#[case("<script></script>", true)]
#[case("<//script>", false)]
#[case("<123nonsense>", false)]
#[case("test", false)]
#[case("", false)]
fn test_is_html(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_html(input), expected, "input: {:?}", input);
}

#[rstest]
#[case("&#x3c;", true)]
#[case("&#xaf;", true)]
#[case("&#x00;", true)]
#[case("&#xf0;", true)]
#[case("&#x3c", true)]
#[case("&#xaf", true)]
#[case("&#x00", true)]
#[case("&#xf0", true)]
#[case("&#ab", true)]
#[case("&lt;", true)]
#[case("&gt;", true)]
#[case("&quot;", true)]
#[case("&amp;", true)]
#[case("#x0a", false)]
#[case("&x00", false)]
#[case("&#x1z", false)]
#[case("", false)]
fn test_is_html_encoded(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_html_encoded(input), expected, "input: {:?}", input);
}

#[rstest]
#[case("%20", true)]
#[case("%af", true)]
#[case("%ff", true)]
#[case("<%az", false)]
#[case("%test%", false)]
#[case("a%b", false)]
#[case("1%2", false)]
#[case("%%a%%", false)]
#[case("", false)]
fn test_is_url_encoded(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_url_encoded(input), expected, "input: {:?}", input);
}

// === Network ===

#[rstest]
#[case("test.example.com", true)]
#[case("example.com", true)]
#[case("example24.com", true)]
#[case("test.example24.com", true)]
#[case("test24.example24.com", true)]
#[case("example", false)]
#[case("EXAMPLE", false)]
#[case("1.foo.com", true)]
#[case("test.example.com.", false)]
#[case("example.com.   ", false)]
#[case("example24.com.", false)]
#[case("test.example24.com.", false)]
#[case("test24.example24.com.", false)]
#[case("example.", false)]
#[case("192.168.0.1", false)]
#[case("email@example.com", false)]
#[case("2001:cdba:0000:0000:0000:0000:3257:9652", false)]
#[case("2001:cdba:0:0:0:0:3257:9652", false)]
#[case("2001:cdba::3257:9652", false)]
#[case("example..........com", false)]
#[case("1234", false)]
#[case("abc1234", false)]
#[case("example. com", false)]
#[case("ex ample.com", false)]
fn test_is_domain_name(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_domain_name(input), expected, "input: {:?}", input);
}

#[rstest]
#[case("1.2.3.4", true)]
#[case("0.0.0.0", true)]
#[case("255.255.255.255", true)]
#[case("::", true)]
#[case("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff", true)]
#[case("2001::f:1234", true)]
#[case("1200:0000:AB00:1234:0000:2552:7777:1313", true)]
#[case("", false)]
#[case("   ", false)]
#[case("foo", false)]
#[case("01.02.03.04", false)]
#[case("256.256.256.256", false)]
#[case("1.2.3", false)]
#[case("1.2.3.4.5", false)]
#[case("-1.2.3.4.5", false)]
#[case(":", false)]
#[case(":::", false)]
#[case("2001::f::1234", false)]
#[case("2001:g::", false)]
#[case("1200:0000:AB00:1234:O000:2552:7777:1313", false)]
fn test_is_ip_address(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_ip_address(input), expected, "input: {:?}", input);
}

// === Named dispatch ===

#[rstest]
#[case("isbn10", "3836221195", true)]
#[case("isbn13", "978-3-8362-2119-1", true)]
#[case("eth-address", "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDB", false)]
#[case("uuid4", "713ae7e3-cb32-45f9-adcb-7c4fa86b90c1", true)]
#[case("data-uri", "data:text/plain;base64,YWJj", true)]
#[case("latitude", "-91", false)]
fn test_validate_named(#[case] format: &str, #[case] input: &str, #[case] expected: bool) {
    assert_eq!(validate_named(format, input), Ok(expected));
}

#[test]
fn test_format_serde_name_matches_display() {
    for format in Format::all() {
        let json = serde_json::to_string(format).unwrap();
        assert_eq!(json, format!("\"{}\"", format));
        let back: Format = serde_json::from_str(&json).unwrap();
        assert_eq!(back, *format);
    }
}
