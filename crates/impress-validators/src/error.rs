//! Error types

use thiserror::Error;

/// Errors from looking up a format by name.
///
/// Predicates themselves never fail; malformed input is simply `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
#[cfg_attr(feature = "uniffi", uniffi(flat_error))]
pub enum ValidatorError {
    #[error("unknown format: {name}")]
    UnknownFormat { name: String },
}
