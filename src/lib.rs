//! # vatnum
//!
//! Formal validation of VAT identification numbers.
//!
//! Checks that a VAT code matches the surface format of its jurisdiction:
//! length, character classes, fixed literals and, for Italy, the check
//! digit. No registry (VIES or otherwise) is contacted, so a `true` result
//! means "well-formed", not "issued" or "active".
//!
//! The code is taken exactly as given. Nothing is trimmed, upper-cased or
//! stripped of its country prefix.
//!
//! ## Quick Start
//!
//! ```rust
//! assert!(vatnum::check("AT", "U12345678"));
//! assert!(vatnum::check("IT", "00154189997"));
//! assert!(!vatnum::check("NL", "123456789A01"));
//!
//! // Unknown jurisdictions are accepted.
//! assert!(vatnum::check("ZZ", "anything"));
//!
//! // The diagnostic variant says why a code was rejected.
//! let err = vatnum::validate("AT", "U123456780").unwrap_err();
//! assert!(err.to_string().contains("length 10"));
//! ```
//!
//! ## Strict jurisdictions
//!
//! ```rust
//! use vatnum::{UnknownJurisdiction, Validator, ValidatorConfig};
//!
//! let strict = Validator::new(ValidatorConfig {
//!     unknown_jurisdiction: UnknownJurisdiction::Reject,
//! });
//! assert!(!strict.check("ZZ", "anything"));
//! assert!(strict.check("DE", "123456789"));
//! ```

pub mod core;
pub mod jurisdictions;
pub mod validator;

pub use crate::core::*;
pub use crate::jurisdictions::{is_supported, jurisdictions, rule_for};
pub use crate::validator::{UnknownJurisdiction, Validator, ValidatorConfig, check, validate};
