//! Rule building blocks: primitives, patterns, composed rules, errors.

mod error;
mod pattern;
mod primitives;
mod rule;

pub use error::VatFormatError;
pub use pattern::{Pattern, matches_pattern};
pub use primitives::{check_length, checksum_italy, italy_check_digit, numbers_only};
pub use rule::{Check, LengthRule, VatRule};
