//! Jurisdiction dispatch and the public `check` / `validate` entry points.

use serde::{Deserialize, Serialize};

use crate::core::VatFormatError;
use crate::jurisdictions::rule_for;

/// What to do with a jurisdiction code that has no format rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownJurisdiction {
    /// Treat every code as formally valid.
    #[default]
    Accept,
    /// Reject every code with [`VatFormatError::UnknownJurisdiction`].
    Reject,
}

/// Validator settings.
///
/// Deserializable so it can be embedded in a host application's
/// configuration; missing fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Policy for jurisdictions without a rule. Defaults to `accept`.
    pub unknown_jurisdiction: UnknownJurisdiction,
}

/// Dispatches a VAT code to the rule of its jurisdiction.
///
/// Holds no state besides its configuration and may be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Create a validator with the given configuration.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// A validator that rejects jurisdictions without a rule.
    pub fn strict() -> Self {
        Self::new(ValidatorConfig {
            unknown_jurisdiction: UnknownJurisdiction::Reject,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate `code` against the rule for `jurisdiction`.
    ///
    /// # Errors
    ///
    /// Returns [`VatFormatError::Length`] or [`VatFormatError::Structure`]
    /// when the code does not fit its jurisdiction's format, and
    /// [`VatFormatError::UnknownJurisdiction`] for an unknown jurisdiction
    /// under [`UnknownJurisdiction::Reject`].
    pub fn validate(&self, jurisdiction: &str, code: &str) -> Result<(), VatFormatError> {
        let Some(rule) = rule_for(jurisdiction) else {
            tracing::trace!(
                jurisdiction,
                policy = ?self.config.unknown_jurisdiction,
                "no VAT format rule"
            );
            return match self.config.unknown_jurisdiction {
                UnknownJurisdiction::Accept => Ok(()),
                UnknownJurisdiction::Reject => Err(VatFormatError::UnknownJurisdiction {
                    jurisdiction: jurisdiction.into(),
                }),
            };
        };

        rule.evaluate(jurisdiction, code).inspect_err(|err| {
            tracing::debug!(%err, "VAT code rejected");
        })
    }

    /// Whether `code` is formally valid for `jurisdiction`.
    ///
    /// Never fails: malformed input yields `false`.
    pub fn check(&self, jurisdiction: &str, code: &str) -> bool {
        match rule_for(jurisdiction) {
            Some(rule) => rule.matches(code),
            None => self.config.unknown_jurisdiction == UnknownJurisdiction::Accept,
        }
    }
}

/// Whether `code` is a formally valid VAT number for `jurisdiction`.
///
/// `jurisdiction` is matched case-sensitively (`"IT"`, not `"it"`); `code`
/// is taken as-is, without the country prefix and without trimming.
/// Unknown jurisdictions are accepted.
///
/// ```
/// assert!(vatnum::check("NO", "123456789MVA"));
/// assert!(!vatnum::check("NO", "123456789MV"));
/// assert!(vatnum::check("XX", ""));
/// ```
pub fn check(jurisdiction: &str, code: &str) -> bool {
    Validator::default().check(jurisdiction, code)
}

/// Like [`check`], but reports why a code was rejected.
///
/// Unknown jurisdictions are accepted, so this never returns
/// [`VatFormatError::UnknownJurisdiction`]; use [`Validator::strict`] for that.
///
/// # Errors
///
/// Returns [`VatFormatError::Length`] or [`VatFormatError::Structure`] when
/// `code` does not fit the format of `jurisdiction`.
pub fn validate(jurisdiction: &str, code: &str) -> Result<(), VatFormatError> {
    Validator::default().validate(jurisdiction, code)
}
