//! Luhn checksum evaluation and check-digit calculation.
//!
//! Positions are counted from the rightmost digit. Digits at odd distance
//! (the last digit, the third-to-last, ...) count as-is; digits at even
//! distance are doubled, folding two-digit products by subtracting 9.

/// Convert a string of ASCII digits into digit values.
///
/// Returns `None` if any character is not an ASCII decimal digit.
#[must_use]
pub fn to_digits(number: &str) -> Option<Vec<u8>> {
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(number.bytes().map(|b| b - b'0').collect())
}

#[inline]
fn doubled(digit: u8) -> u32 {
    let d = u32::from(digit) * 2;
    if d > 9 {
        d - 9
    } else {
        d
    }
}

/// Weighted Luhn total of `digits`.
///
/// `double_rightmost` selects which parity gets doubled: `false` evaluates a
/// complete number, `true` evaluates a partial number whose check digit has
/// not been appended yet.
#[must_use]
pub fn luhn_total(digits: &[u8], double_rightmost: bool) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let even_distance = (i % 2 == 1) != double_rightmost;
            if even_distance {
                doubled(d)
            } else {
                u32::from(d)
            }
        })
        .sum()
}

/// Check digit that makes `partial` followed by it Luhn-valid.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn check_digit(partial: &[u8]) -> u8 {
    let total = luhn_total(partial, true);
    ((10 - total % 10) % 10) as u8
}

/// Whether `number` passes the Luhn checksum.
///
/// Empty input and input containing anything but ASCII digits is never valid.
///
/// # Example
/// ```
/// assert!(cardgen_core::luhn::is_luhn_valid("4111111111111111"));
/// assert!(!cardgen_core::luhn::is_luhn_valid("4111111111111112"));
/// ```
#[must_use]
pub fn is_luhn_valid(number: &str) -> bool {
    match to_digits(number) {
        Some(digits) if !digits.is_empty() => luhn_total(&digits, false) % 10 == 0,
        _ => false,
    }
}

/// Compute the check digit for a partial number given as a digit string.
///
/// Returns `None` if `partial` contains a non-digit character.
///
/// # Example
/// ```
/// assert_eq!(cardgen_core::luhn::compute_check_digit("41111100000000"), Some(8));
/// ```
#[must_use]
pub fn compute_check_digit(partial: &str) -> Option<u8> {
    to_digits(partial).map(|digits| check_digit(&digits))
}
