//! Luhn-valid card number synthesis.

use rand::Rng;

use crate::constants::CARD_NUMBER_LENGTH;
use crate::error::CardError;
use crate::luhn::{check_digit, to_digits};

/// Build a card number from `bin`, random filler digits and a check digit.
///
/// The result is always [`CARD_NUMBER_LENGTH`] digits long and passes the
/// Luhn checksum. `bin` must be non-empty, all digits, and leave room for at
/// least the check digit.
pub fn generate_card_number<R: Rng + ?Sized>(bin: &str, rng: &mut R) -> Result<String, CardError> {
    let mut digits = match to_digits(bin) {
        Some(d) if !d.is_empty() => d,
        _ => return Err(CardError::InvalidBin("BIN must contain only digits".into())),
    };
    if digits.len() >= CARD_NUMBER_LENGTH {
        return Err(CardError::InvalidBin(format!(
            "BIN must be shorter than {CARD_NUMBER_LENGTH} digits"
        )));
    }

    digits.reserve(CARD_NUMBER_LENGTH - digits.len());
    while digits.len() < CARD_NUMBER_LENGTH - 1 {
        digits.push(rng.random_range(0..10));
    }
    digits.push(check_digit(&digits));

    Ok(digits.iter().map(|&d| char::from(b'0' + d)).collect())
}
