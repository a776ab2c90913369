//! Error types for GUID construction and strict parsing.

use thiserror::Error;

/// Errors that can occur when constructing or strictly parsing a GUID.
///
/// Validation and equality checks never produce these; they report
/// non-conforming input as plain `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuidError {
    /// No value was supplied at all (neither a string nor a GUID).
    #[error("no value supplied for GUID")]
    MissingValue,

    /// The string does not match the hyphenated 8-4-4-4-12 hex format.
    #[error("invalid GUID format: '{value}'")]
    InvalidFormat { value: String },
}

impl GuidError {
    /// Returns true if this error indicates absent input.
    pub fn is_missing(&self) -> bool {
        matches!(self, GuidError::MissingValue)
    }

    /// Returns true if this error indicates a malformed string.
    pub fn is_format_error(&self) -> bool {
        matches!(self, GuidError::InvalidFormat { .. })
    }
}
