//! Composed per-jurisdiction rules.

use serde::Serialize;
use std::fmt;

use super::error::VatFormatError;
use super::pattern::Pattern;
use super::primitives::{check_length, checksum_italy, italy_check_digit, numbers_only};

/// Accepted code lengths, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthRule {
    /// Exactly this many characters.
    Exact(usize),
    /// Between `min` and `max` characters, inclusive.
    Range { min: usize, max: usize },
    /// One of a discrete set of lengths (e.g. 9 or 12).
    OneOf(&'static [usize]),
}

impl LengthRule {
    /// Whether `code` has an accepted length.
    pub fn accepts(&self, code: &str) -> bool {
        match *self {
            Self::Exact(n) => check_length(code, n, n),
            Self::Range { min, max } => check_length(code, min, max),
            Self::OneOf(lengths) => lengths.iter().any(|&n| check_length(code, n, n)),
        }
    }

    /// Shortest accepted length.
    pub fn min(&self) -> usize {
        match *self {
            Self::Exact(n) => n,
            Self::Range { min, .. } => min,
            Self::OneOf(lengths) => lengths.iter().copied().min().unwrap_or(0),
        }
    }

    /// Longest accepted length.
    pub fn max(&self) -> usize {
        match *self {
            Self::Exact(n) => n,
            Self::Range { max, .. } => max,
            Self::OneOf(lengths) => lengths.iter().copied().max().unwrap_or(0),
        }
    }
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Range { min, max } => write!(f, "{min}-{max}"),
            Self::OneOf(lengths) => match lengths.split_last() {
                None => f.write_str("none"),
                Some((last, [])) => write!(f, "{last}"),
                Some((last, rest)) => {
                    let head: Vec<String> = rest.iter().map(usize::to_string).collect();
                    write!(f, "{} or {last}", head.join(", "))
                }
            },
        }
    }
}

/// A structural check applied after the length gate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// Every character is an ASCII digit.
    Digits,
    /// The whole code matches a pattern.
    Pattern(Pattern),
    /// None of these characters may appear (case-sensitive).
    Forbidden(&'static [char]),
    /// The 11th digit is the Italian check digit of the first ten.
    ItalianChecksum,
}

impl Check {
    /// Whether `code` passes this check.
    pub fn passes(&self, code: &str) -> bool {
        match self {
            Self::Digits => numbers_only(code),
            Self::Pattern(pattern) => pattern.is_match(code),
            Self::Forbidden(chars) => !code.chars().any(|c| chars.contains(&c)),
            Self::ItalianChecksum => checksum_italy(code),
        }
    }

    // Only called once `passes` has returned false.
    fn failure_reason(&self, code: &str) -> String {
        match self {
            Self::Digits => "must contain digits only".into(),
            Self::Pattern(pattern) => format!("expected {}", pattern.hint()),
            Self::Forbidden(chars) => match code.chars().find(|c| chars.contains(c)) {
                Some(c) => format!("character '{c}' is not allowed"),
                None => "contains a forbidden character".into(),
            },
            Self::ItalianChecksum => match code.get(..10).and_then(italy_check_digit) {
                Some(expected) => format!("check digit mismatch, expected {expected}"),
                None => "check digit cannot be computed".into(),
            },
        }
    }
}

/// The format rule for one jurisdiction: a length gate followed by
/// structural checks, all of which must pass.
#[derive(Debug, Clone, Serialize)]
pub struct VatRule {
    /// Accepted lengths.
    pub length: LengthRule,
    /// Structural checks, applied in order after the length gate.
    pub checks: Vec<Check>,
}

impl VatRule {
    /// A rule with only a length gate.
    pub fn new(length: LengthRule) -> Self {
        Self {
            length,
            checks: Vec::new(),
        }
    }

    /// Shorthand for a length gate plus [`Check::Digits`].
    pub fn digits(length: LengthRule) -> Self {
        Self::new(length).with(Check::Digits)
    }

    /// Append a structural check.
    pub fn with(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Whether `code` satisfies the rule.
    pub fn matches(&self, code: &str) -> bool {
        self.length.accepts(code) && self.checks.iter().all(|c| c.passes(code))
    }

    /// Evaluate the rule, stopping at the first failing stage.
    pub fn evaluate(&self, jurisdiction: &str, code: &str) -> Result<(), VatFormatError> {
        if !self.length.accepts(code) {
            return Err(VatFormatError::Length {
                jurisdiction: jurisdiction.into(),
                code: code.into(),
                actual: code.len(),
                expected: self.length,
            });
        }

        match self.checks.iter().find(|c| !c.passes(code)) {
            None => Ok(()),
            Some(check) => Err(VatFormatError::Structure {
                jurisdiction: jurisdiction.into(),
                code: code.into(),
                reason: check.failure_reason(code),
            }),
        }
    }
}
