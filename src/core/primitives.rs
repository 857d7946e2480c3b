//! Stateless checks shared by the jurisdiction rules.
//!
//! Every function here is total: any `&str`, including the empty string
//! and non-ASCII input, yields a `bool` (or `None`) and never panics.

/// Length of an Italian partita IVA, check digit included.
const ITALY_LEN: usize = 11;

/// Check that `code` is between `min` and `max` bytes long, inclusive.
///
/// Length is counted in bytes. All supported formats are ASCII, so for any
/// code that can pass a structural check this equals the character count.
pub fn check_length(code: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&code.len())
}

/// Check that `code` is a non-empty run of ASCII digits.
///
/// No numeric conversion takes place: leading zeros are kept and there is
/// no upper bound on the number of digits. Signs, decimal points, exponents
/// and whitespace are all rejected.
pub fn numbers_only(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit())
}

/// Expected Italian check digit for a 10-digit prefix.
///
/// Digits at even positions are summed as-is; digits at odd positions are
/// doubled and reduced by 9 when the result exceeds 9. The check digit is
/// `(10 - sum % 10) % 10`.
///
/// Returns `None` unless `prefix` is exactly 10 ASCII digits.
pub fn italy_check_digit(prefix: &str) -> Option<u8> {
    let digits = prefix.as_bytes();
    if digits.len() != ITALY_LEN - 1 || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(check_digit(digits))
}

/// Verify the check digit of an 11-digit Italian VAT code.
///
/// Only the first 11 bytes are inspected. Shorter input, or a non-digit
/// anywhere in those 11 bytes, fails the check.
pub fn checksum_italy(code: &str) -> bool {
    let Some(head) = code.as_bytes().get(..ITALY_LEN) else {
        return false;
    };
    if !head.iter().all(u8::is_ascii_digit) {
        return false;
    }
    check_digit(&head[..ITALY_LEN - 1]) == head[ITALY_LEN - 1] - b'0'
}

// Caller guarantees `digits` holds ASCII digits only.
fn check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 0 {
                digit
            } else {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}
