//! CSS color notations

use crate::patterns::{HEXCOLOR, HSL, HSLA, RGB, RGBA};

/// `#rgb` or `#rrggbb`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_hexcolor(input: &str) -> bool {
    HEXCOLOR.is_match(input)
}

/// `rgb(r, g, b)` with 0-255 components or 0-100% percentages
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_rgb(input: &str) -> bool {
    RGB.is_match(input)
}

/// `rgba(r, g, b, a)`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_rgba(input: &str) -> bool {
    RGBA.is_match(input)
}

/// `hsl(h, s%, l%)` with hue in degrees
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_hsl(input: &str) -> bool {
    HSL.is_match(input)
}

/// `hsla(h, s%, l%, a)`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_hsla(input: &str) -> bool {
    HSLA.is_match(input)
}
