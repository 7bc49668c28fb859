//! Display formatting for card numbers.

use crate::constants::GROUP_WIDTH;

/// Split `number` into space-separated groups of four, left to right.
///
/// The final group holds whatever remains, so a 15-digit number renders
/// as `4-4-4-3`.
///
/// ```
/// assert_eq!(
///     cardgen_core::format::format_grouped("123456789012345"),
///     "1234 5678 9012 345"
/// );
/// ```
#[must_use]
pub fn format_grouped(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    chars
        .chunks(GROUP_WIDTH)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove the group separators produced by [`format_grouped`].
#[must_use]
pub fn strip_grouping(formatted: &str) -> String {
    formatted.chars().filter(|c| !c.is_whitespace()).collect()
}
