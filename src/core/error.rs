use thiserror::Error;

use super::rule::LengthRule;

/// Why a VAT code was rejected.
///
/// Returned by the diagnostic [`validate`](crate::validate) entry point.
/// The boolean [`check`](crate::check) never exposes it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VatFormatError {
    /// The code has the wrong number of characters.
    #[error("invalid VAT code '{code}' for {jurisdiction}: length {actual}, expected {expected}")]
    Length {
        /// Jurisdiction the code was checked against.
        jurisdiction: String,
        /// The rejected code, as submitted.
        code: String,
        /// Length of the submitted code in bytes.
        actual: usize,
        /// Lengths the jurisdiction accepts.
        expected: LengthRule,
    },

    /// The length is right but the characters are not.
    #[error("invalid VAT code '{code}' for {jurisdiction}: {reason}")]
    Structure {
        /// Jurisdiction the code was checked against.
        jurisdiction: String,
        /// The rejected code, as submitted.
        code: String,
        /// Which structural check failed.
        reason: String,
    },

    /// No format rule exists for the jurisdiction and the validator is strict.
    #[error("unknown jurisdiction '{jurisdiction}'")]
    UnknownJurisdiction {
        /// The jurisdiction code that was looked up.
        jurisdiction: String,
    },
}

impl VatFormatError {
    /// The jurisdiction code the error refers to.
    pub fn jurisdiction(&self) -> &str {
        match self {
            Self::Length { jurisdiction, .. }
            | Self::Structure { jurisdiction, .. }
            | Self::UnknownJurisdiction { jurisdiction } => jurisdiction,
        }
    }
}
