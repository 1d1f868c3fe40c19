//! Decimal-degree coordinates

use crate::patterns::{LATITUDE, LONGITUDE};

/// Latitude in decimal degrees, -90 to 90
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_latitude(input: &str) -> bool {
    LATITUDE.is_match(input)
}

/// Longitude in decimal degrees, -180 to 180
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_longitude(input: &str) -> bool {
    LONGITUDE.is_match(input)
}
