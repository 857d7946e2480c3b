//! Per-jurisdiction VAT format rules.
//!
//! Covers the EU member states (Greece as `EL`), the United Kingdom and a
//! set of non-EU jurisdictions. Lookups are case-sensitive exact matches on
//! the jurisdiction code; `"de"` is not `"DE"`.

use std::sync::LazyLock;

use crate::core::{Check, LengthRule, Pattern, VatRule};

/// Check whether a format rule exists for `jurisdiction`.
pub fn is_supported(jurisdiction: &str) -> bool {
    rule_for(jurisdiction).is_some()
}

/// The format rule for `jurisdiction`, if one is defined.
pub fn rule_for(jurisdiction: &str) -> Option<&'static VatRule> {
    let table = &*RULES;
    table
        .binary_search_by(|(code, _)| code.cmp(&jurisdiction))
        .ok()
        .map(|i| &table[i].1)
}

/// All jurisdiction codes with a format rule, in ascending order.
pub fn jurisdictions() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|(code, _)| *code)
}

fn pattern(source: &'static str, hint: &'static str) -> Check {
    Check::Pattern(Pattern::new(source, hint).expect("built-in VAT pattern must compile"))
}

fn exact(n: usize) -> LengthRule {
    LengthRule::Exact(n)
}

fn range(min: usize, max: usize) -> LengthRule {
    LengthRule::Range { min, max }
}

/// Rule table, sorted by jurisdiction code for binary search.
static RULES: LazyLock<Vec<(&'static str, VatRule)>> = LazyLock::new(|| {
    let mut rules = vec![
        // Albania: J, K or L, 8 digits, a letter. Eg. K99999999L
        (
            "AL",
            VatRule::new(exact(10)).with(pattern(
                "[JKL][0-9]{8}[A-Z]",
                "'J', 'K' or 'L' followed by 8 digits and a letter",
            )),
        ),
        ("AT", VatRule::new(exact(9)).with(pattern("U[0-9]{8}", "'U' followed by 8 digits"))),
        ("AU", VatRule::digits(exact(11))),
        ("BE", VatRule::digits(exact(10))),
        ("BG", VatRule::digits(range(9, 10))),
        ("BY", VatRule::digits(exact(9))),
        // Canada: length only
        ("CA", VatRule::new(exact(9))),
        (
            "CH",
            VatRule::new(exact(11)).with(pattern(
                r"[0-9]{3}\.[0-9]{3}\.[0-9]{3}",
                "three groups of 3 digits separated by '.'",
            )),
        ),
        (
            "CY",
            VatRule::new(exact(9)).with(pattern("[0-9]{8}[A-Z]", "8 digits followed by a letter")),
        ),
        ("CZ", VatRule::digits(range(8, 10))),
        ("DE", VatRule::digits(exact(9))),
        ("DK", VatRule::digits(exact(8))),
        ("EE", VatRule::digits(exact(9))),
        ("EL", VatRule::digits(exact(9))),
        // Spain: first and/or last character may be a letter
        (
            "ES",
            VatRule::new(exact(9)).with(pattern(
                "[0-9A-Z][0-9]{7}[0-9A-Z]",
                "an alphanumeric character, 7 digits and an alphanumeric character",
            )),
        ),
        ("FI", VatRule::digits(exact(8))),
        // France: letters allowed in the 2-character key, except O and I
        (
            "FR",
            VatRule::new(exact(11)).with(Check::Forbidden(&['O', 'I'])).with(pattern(
                "[0-9A-Z]{2}[0-9]{9}",
                "2 alphanumeric characters followed by 9 digits",
            )),
        ),
        ("GB", VatRule::digits(exact(9))),
        ("HR", VatRule::digits(exact(11))),
        ("HU", VatRule::digits(exact(8))),
        ("ID", VatRule::digits(exact(15))),
        // Ireland: 1234567X, 1234567XX, 12345678X or 1X23456X / 1X234567X
        (
            "IE",
            VatRule::new(range(8, 9)).with(pattern(
                "[0-9]{7,8}[A-Z]{1,2}|[0-9][A-Z][0-9]{5,6}[A-Z]",
                "7-8 digits and 1-2 letters, or a digit, a letter, 5-6 digits and a letter",
            )),
        ),
        ("IL", VatRule::digits(exact(9))),
        ("IN", VatRule::digits(exact(15))),
        ("IS", VatRule::new(range(5, 6))),
        ("IT", VatRule::digits(exact(11)).with(Check::ItalianChecksum)),
        ("KZ", VatRule::digits(exact(12))),
        ("LT", VatRule::digits(LengthRule::OneOf(&[9, 12]))),
        ("LU", VatRule::digits(exact(8))),
        ("LV", VatRule::digits(exact(11))),
        // North Macedonia: MK4032013544513
        ("MK", VatRule::new(exact(15)).with(pattern("MK[0-9]{13}", "'MK' followed by 13 digits"))),
        ("MT", VatRule::digits(exact(8))),
        // Nigeria: 01012345-0001
        (
            "NG",
            VatRule::new(exact(13))
                .with(pattern("[0-9]{8}-[0-9]{4}", "8 digits, '-' and 4 digits")),
        ),
        // Netherlands: the tenth character is always B
        (
            "NL",
            VatRule::new(exact(12))
                .with(pattern("[0-9]{9}B[0-9]{2}", "9 digits, 'B' and 2 digits")),
        ),
        (
            "NO",
            VatRule::new(LengthRule::OneOf(&[9, 12]))
                .with(pattern("[0-9]{9}(?:MVA)?", "9 digits, optionally followed by 'MVA'")),
        ),
        ("NZ", VatRule::digits(exact(9))),
        ("PL", VatRule::digits(exact(10))),
        ("PT", VatRule::digits(exact(9))),
        ("RO", VatRule::digits(range(2, 10))),
        ("RS", VatRule::digits(exact(9))),
        // Russia: INN of 10 or 12 characters, 13 for OGRN; length only
        ("RU", VatRule::new(LengthRule::OneOf(&[10, 12, 13]))),
        ("SA", VatRule::digits(exact(15))),
        ("SE", VatRule::digits(exact(12))),
        ("SI", VatRule::digits(exact(8))),
        ("SK", VatRule::digits(exact(10))),
        ("SM", VatRule::digits(exact(5))),
        ("TR", VatRule::digits(exact(10))),
        ("UA", VatRule::digits(exact(12))),
        ("UZ", VatRule::digits(exact(9))),
    ];
    rules.sort_by_key(|(code, _)| *code);
    rules
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sorted_and_unique() {
        for window in RULES.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "jurisdictions not sorted or duplicated: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn table_size() {
        // 30 from the current rule set, 18 from the broader one, plus NZ
        assert_eq!(jurisdictions().count(), 49);
    }

    #[test]
    fn every_rule_has_sane_bounds() {
        for code in jurisdictions() {
            let rule = rule_for(code).unwrap();
            assert!(rule.length.min() > 0, "{code}");
            assert!(rule.length.min() <= rule.length.max(), "{code}");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(is_supported("DE"));
        assert!(!is_supported("de"));
        assert!(!is_supported("De"));
    }

    #[test]
    fn lookup_rejects_odd_keys() {
        assert!(!is_supported(""));
        assert!(!is_supported("DEU"));
        assert!(!is_supported(" DE"));
        assert!(!is_supported("XI"));
        assert!(!is_supported("GR"));
    }

    #[test]
    fn all_patterns_compile() {
        // Forces the LazyLock and every `expect` inside it
        for code in jurisdictions() {
            let _ = rule_for(code).unwrap().matches("");
        }
    }

    #[test]
    fn germany_is_exactly_nine_digits() {
        let rule = rule_for("DE").unwrap();
        assert_eq!(rule.length, LengthRule::Exact(9));
        assert!(!rule.matches("1234567890"));
    }
}
