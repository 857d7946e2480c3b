//! Anchored, case-insensitive structural patterns.

use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};
use std::fmt;

/// A compiled whole-string pattern over ASCII character classes.
///
/// The source is wrapped as `^(?:source)$` so a match always spans the
/// entire code. Matching ignores ASCII case and Unicode mode is off, so
/// `[A-Z]` means the 52 ASCII letters and nothing else.
#[derive(Clone)]
pub struct Pattern {
    source: &'static str,
    hint: &'static str,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` into an anchored pattern.
    ///
    /// `hint` is a short human description used in error messages
    /// (e.g. `"'U' followed by 8 digits"`).
    pub fn new(source: &'static str, hint: &'static str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&format!("^(?:{source})$"))
            .case_insensitive(true)
            .unicode(false)
            .build()?;
        Ok(Self {
            source,
            hint,
            regex,
        })
    }

    /// Whether `code` matches the whole pattern.
    pub fn is_match(&self, code: &str) -> bool {
        self.regex.is_match(code)
    }

    /// The unanchored source the pattern was built from.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Human description of the expected shape.
    pub fn hint(&self) -> &'static str {
        self.hint
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("hint", &self.hint)
            .finish()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.source)
    }
}

/// Check that `code` matches `pattern` from start to end.
pub fn matches_pattern(code: &str, pattern: &Pattern) -> bool {
    pattern.is_match(code)
}
