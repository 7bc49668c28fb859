//! The generated card record and its expiry value.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Serialize, Serializer};

use crate::brand::CardBrand;
use crate::constants::{CVV_LENGTH, EXPIRY_YEAR_MAX, EXPIRY_YEAR_MIN};
use crate::error::CardError;
use crate::format::format_grouped;

/// Month and two-digit year of a card expiry.
///
/// Always holds a month in `1..=12` and a year in `0..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expiry {
    month: u8,
    year: u8,
}

impl Expiry {
    /// Create an expiry, rejecting out-of-range months and years.
    pub fn new(month: u8, year: u8) -> Result<Self, CardError> {
        if !(1..=12).contains(&month) {
            return Err(CardError::InvalidOption(format!(
                "expiry month must be between 01 and 12, got {month}"
            )));
        }
        if year > 99 {
            return Err(CardError::InvalidOption(format!(
                "expiry year must have two digits, got {year}"
            )));
        }
        Ok(Self { month, year })
    }

    /// Draw a random expiry: month uniform in `1..=12`, year uniform in `24..=28`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            month: rng.random_range(1..=12),
            year: rng.random_range(EXPIRY_YEAR_MIN..=EXPIRY_YEAR_MAX),
        }
    }

    #[must_use]
    pub fn month(self) -> u8 {
        self.month
    }

    #[must_use]
    pub fn year(self) -> u8 {
        self.year
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

impl FromStr for Expiry {
    type Err = CardError;

    /// Parse `MM/YY` or `MM|YY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidOption(format!("expiry must look like MM/YY, got {s:?}"));
        let (month, year) = s.trim().split_once(['/', '|']).ok_or_else(invalid)?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(month) || !two_digits(year) {
            return Err(invalid());
        }
        let month = month.parse().map_err(|_| invalid())?;
        let year = year.parse().map_err(|_| invalid())?;
        Self::new(month, year)
    }
}

impl Serialize for Expiry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Draw a three-digit CVV; leading zeros are kept.
pub fn random_cvv<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CVV_LENGTH)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// Whether `cvv` is exactly three ASCII digits.
#[must_use]
pub fn is_valid_cvv(cvv: &str) -> bool {
    cvv.len() == CVV_LENGTH && cvv.bytes().all(|b| b.is_ascii_digit())
}

/// One synthesized test card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCard {
    number: String,
    formatted_number: String,
    expiry: Expiry,
    cvv: String,
    #[serde(rename = "type")]
    card_type: CardBrand,
    index: u32,
}

impl GeneratedCard {
    /// Assemble a card; the display form of the number is derived here.
    #[must_use]
    pub fn new(index: u32, number: String, expiry: Expiry, cvv: String, card_type: CardBrand) -> Self {
        let formatted_number = format_grouped(&number);
        Self {
            number,
            formatted_number,
            expiry,
            cvv,
            card_type,
            index,
        }
    }

    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    #[must_use]
    pub fn formatted_number(&self) -> &str {
        &self.formatted_number
    }

    #[must_use]
    pub fn expiry(&self) -> Expiry {
        self.expiry
    }

    #[must_use]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    #[must_use]
    pub fn card_type(&self) -> CardBrand {
        self.card_type
    }

    /// 1-based position within its batch.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }
}
