//! Precompiled grammars shared by every predicate.
//!
//! Each pattern is compiled on first use and never mutated afterwards.
//! Classes are spelled out as ASCII ranges (`[0-9]`, not `\d`) because the
//! regex engine treats the shorthand classes as Unicode-aware.

use lazy_static::lazy_static;
use regex::Regex;

/// One IPv4 octet, 0-255 without leading zeros.
const OCTET: &str = r"(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])";

/// One RGB component, 0-255.
const RGB_COMPONENT: &str = r"(?:0|[1-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-5])";

/// A percentage, 0-100.
const PERCENT: &str = r"(?:0|[1-9][0-9]?|100)%";

/// Alpha channel: 0, 1, or a fraction written as 0.x
const ALPHA_CHANNEL: &str = r"(?:0\.[0-9]+|[01])";

/// Hue in degrees, 0-360.
const HUE: &str = r"(?:0|[1-9][0-9]?|[12][0-9][0-9]|3[0-5][0-9]|360)";

/// ASCII whitespace as accepted around CSS color arguments.
const WS: &str = r"[\t\n\f\r ]*";

/// Unicode ranges allowed in email atoms and domain labels.
const UCS: &str = r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";

/// Three comma-separated components, either all absolute or all percentages.
fn rgb_body() -> String {
    format!(
        r"(?:{c}{ws},{ws}{c}{ws},{ws}{c}|{p}{ws},{ws}{p}{ws},{ws}{p})",
        c = RGB_COMPONENT,
        p = PERCENT,
        ws = WS
    )
}

fn hsl_body() -> String {
    format!(
        r"{HUE}{WS},{WS}{PERCENT}{WS},{WS}{PERCENT}",
        HUE = HUE,
        WS = WS,
        PERCENT = PERCENT
    )
}

fn email_pattern() -> String {
    let atext = format!(r"[a-zA-Z0-9!#$%&'*+/=?^_`{{|}}~\-{UCS}]", UCS = UCS);
    let dot_atom = format!(r"{a}+(?:\.{a}+)*", a = atext);

    let fws = r"(?:(?:[\x20\x09]*\x0d\x0a)?[\x20\x09]+)";
    let qtext = format!(
        r"[\x01-\x08\x0b\x0c\x0e-\x1f\x7f\x21\x23-\x5b\x5d-\x7e{UCS}]",
        UCS = UCS
    );
    let quoted_pair = format!(r"\x5c[\x01-\x09\x0b\x0c\x0d-\x7f{UCS}]", UCS = UCS);
    let quoted = format!(
        r"\x22(?:{fws}?(?:{qtext}|{quoted_pair}))*{fws}?\x22",
        fws = fws,
        qtext = qtext,
        quoted_pair = quoted_pair
    );

    let alnum = format!(r"[a-zA-Z0-9{UCS}]", UCS = UCS);
    let alpha = format!(r"[a-zA-Z{UCS}]", UCS = UCS);
    let inner = format!(r"[a-zA-Z0-9\-._~{UCS}]", UCS = UCS);
    let label = format!(r"(?:{alnum}|{alnum}{inner}*{alnum})", alnum = alnum, inner = inner);
    let tld = format!(r"(?:{alpha}|{alpha}{inner}*{alpha})", alpha = alpha, inner = inner);

    format!(
        r"^(?:{dot_atom}|{quoted})@(?:{label}\.)+{tld}\.?$",
        dot_atom = dot_atom,
        quoted = quoted,
        label = label,
        tld = tld
    )
}

fn ipv6_pattern() -> String {
    let h = r"[0-9a-fA-F]{1,4}";
    let v4 = format!(r"{o}(?:\.{o}){{3}}", o = OCTET);
    let alternatives = [
        format!(r"(?:{h}:){{7}}(?:{h}|:)", h = h),
        format!(r"(?:{h}:){{6}}(?::{h}|{v4}|:)", h = h, v4 = v4),
        format!(r"(?:{h}:){{5}}(?:(?::{h}){{1,2}}|:{v4}|:)", h = h, v4 = v4),
        format!(r"(?:{h}:){{4}}(?:(?::{h}){{1,3}}|(?::{h})?:{v4}|:)", h = h, v4 = v4),
        format!(r"(?:{h}:){{3}}(?:(?::{h}){{1,4}}|(?::{h}){{0,2}}:{v4}|:)", h = h, v4 = v4),
        format!(r"(?:{h}:){{2}}(?:(?::{h}){{1,5}}|(?::{h}){{0,3}}:{v4}|:)", h = h, v4 = v4),
        format!(r"(?:{h}:)(?:(?::{h}){{1,6}}|(?::{h}){{0,4}}:{v4}|:)", h = h, v4 = v4),
        format!(r":(?:(?::{h}){{1,7}}|(?::{h}){{0,5}}:{v4}|:)", h = h, v4 = v4),
    ];
    format!(r"(?:{})(?:%.+)?", alternatives.join("|"))
}

lazy_static! {
    // Text classes
    pub(crate) static ref ALPHA: Regex = Regex::new(r"^[a-zA-Z]+$").unwrap();
    pub(crate) static ref ALPHA_NUMERIC: Regex = Regex::new(r"^[a-zA-Z0-9]+$").unwrap();
    pub(crate) static ref ALPHA_UNICODE: Regex = Regex::new(r"^\p{L}+$").unwrap();
    pub(crate) static ref ALPHA_UNICODE_NUMERIC: Regex = Regex::new(r"^[\p{L}\p{N}]+$").unwrap();
    pub(crate) static ref NUMERIC: Regex = Regex::new(r"^[-+]?[0-9]+(?:\.[0-9]+)?$").unwrap();
    pub(crate) static ref NUMBER: Regex = Regex::new(r"^[0-9]+$").unwrap();
    pub(crate) static ref HEXADECIMAL: Regex = Regex::new(r"^(?:0[xX])?[0-9a-fA-F]+$").unwrap();
    pub(crate) static ref ASCII: Regex = Regex::new(r"^[\x00-\x7F]*$").unwrap();
    pub(crate) static ref PRINTABLE_ASCII: Regex = Regex::new(r"^[\x20-\x7E]*$").unwrap();
    pub(crate) static ref MULTIBYTE: Regex = Regex::new(r"[^\x00-\x7F]").unwrap();

    // Colors
    pub(crate) static ref HEXCOLOR: Regex =
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
    pub(crate) static ref RGB: Regex =
        Regex::new(&format!(r"^rgb\({WS}{}{WS}\)$", rgb_body(), WS = WS)).unwrap();
    pub(crate) static ref RGBA: Regex = Regex::new(&format!(
        r"^rgba\({WS}{}{WS},{WS}{ALPHA_CHANNEL}{WS}\)$",
        rgb_body(),
        WS = WS,
        ALPHA_CHANNEL = ALPHA_CHANNEL
    ))
    .unwrap();
    pub(crate) static ref HSL: Regex =
        Regex::new(&format!(r"^hsl\({WS}{}{WS}\)$", hsl_body(), WS = WS)).unwrap();
    pub(crate) static ref HSLA: Regex = Regex::new(&format!(
        r"^hsla\({WS}{}{WS},{WS}{ALPHA_CHANNEL}{WS}\)$",
        hsl_body(),
        WS = WS,
        ALPHA_CHANNEL = ALPHA_CHANNEL
    ))
    .unwrap();

    // Encodings
    pub(crate) static ref BASE64: Regex = Regex::new(
        r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{4})$"
    )
    .unwrap();
    pub(crate) static ref BASE64_URL: Regex = Regex::new(
        r"^(?:[A-Za-z0-9_-]{4})*(?:[A-Za-z0-9_-]{2}==|[A-Za-z0-9_-]{3}=|[A-Za-z0-9_-]{4})$"
    )
    .unwrap();
    // Media type, optional parameters, optional ;base64 marker
    pub(crate) static ref DATA_URI_HEADER: Regex = Regex::new(
        r"^data:(?:[0-9A-Za-z_]+/[0-9A-Za-z_.+-]+(?:;[0-9A-Za-z_.+-]+=[0-9A-Za-z_.+%-]+)*)?(?:;base64)?$"
    )
    .unwrap();
    pub(crate) static ref URL_ENCODED: Regex = Regex::new(r"%[A-Fa-f0-9]{2}").unwrap();
    pub(crate) static ref HTML_ENCODED: Regex =
        Regex::new(r"&#x?[0-9a-fA-F]{2}|&gt|&lt|&quot|(?:&amp)+;?").unwrap();
    pub(crate) static ref HTML: Regex = Regex::new(r"</?[a-zA-Z]+.*?>").unwrap();

    // Network
    pub(crate) static ref EMAIL: Regex = Regex::new(&email_pattern()).unwrap();
    pub(crate) static ref IP_ADDRESS: Regex = Regex::new(&format!(
        r"^[\t\n\f\r ]*(?:{o}(?:\.{o}){{3}}|{v6})[\t\n\f\r ]*$",
        o = OCTET,
        v6 = ipv6_pattern()
    ))
    .unwrap();
    pub(crate) static ref DOMAIN_NAME: Regex = Regex::new(
        r"^[a-zA-Z0-9][a-zA-Z0-9_-]{0,62}(?:\.[a-zA-Z0-9_][a-zA-Z0-9_-]{0,62})*?\.[a-zA-Z][a-zA-Z0-9]{0,62}\.?$"
    )
    .unwrap();

    // Coordinates
    pub(crate) static ref LATITUDE: Regex =
        Regex::new(r"^[-+]?(?:[1-8]?[0-9](?:\.[0-9]+)?|90(?:\.0+)?)$").unwrap();
    pub(crate) static ref LONGITUDE: Regex = Regex::new(
        r"^[-+]?(?:180(?:\.0+)?|(?:1[0-7][0-9]|[1-9]?[0-9])(?:\.[0-9]+)?)$"
    )
    .unwrap();

    // UUIDs
    pub(crate) static ref UUID: Regex = Regex::new(
        r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$"
    )
    .unwrap();
    pub(crate) static ref UUID3: Regex = Regex::new(
        r"^[0-9a-f]{8}-[0-9a-f]{4}-3[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$"
    )
    .unwrap();
    pub(crate) static ref UUID4: Regex = Regex::new(
        r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"
    )
    .unwrap();
    pub(crate) static ref UUID5: Regex = Regex::new(
        r"^[0-9a-f]{8}-[0-9a-f]{4}-5[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"
    )
    .unwrap();
    pub(crate) static ref UUID_MIXED: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .unwrap();
    pub(crate) static ref UUID3_MIXED: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-3[0-9a-fA-F]{3}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .unwrap();
    pub(crate) static ref UUID4_MIXED: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$"
    )
    .unwrap();
    pub(crate) static ref UUID5_MIXED: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-5[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$"
    )
    .unwrap();

    // ISBN, applied after separators are stripped
    pub(crate) static ref ISBN10: Regex = Regex::new(r"^(?:[0-9]{9}X|[0-9]{10})$").unwrap();
    pub(crate) static ref ISBN13: Regex = Regex::new(r"^97[89][0-9]{10}$").unwrap();

    // Cryptocurrency addresses
    pub(crate) static ref BTC_ADDRESS: Regex =
        Regex::new(r"^[13][a-km-zA-HJ-NP-Z1-9]{25,34}$").unwrap();
    pub(crate) static ref BTC_ADDRESS_LOWER: Regex =
        Regex::new(r"^bc1[02-9ac-hj-np-z]{7,76}$").unwrap();
    pub(crate) static ref BTC_ADDRESS_UPPER: Regex =
        Regex::new(r"^BC1[02-9AC-HJ-NP-Z]{7,76}$").unwrap();
    pub(crate) static ref ETH_ADDRESS: Regex = Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap();
    pub(crate) static ref ETH_ADDRESS_LOWER: Regex = Regex::new(r"^0x[0-9a-f]{40}$").unwrap();
    pub(crate) static ref ETH_ADDRESS_UPPER: Regex = Regex::new(r"^0x[0-9A-F]{40}$").unwrap();
}
