//! Network classification from the leading digits of an issuer prefix.

use std::fmt;

use serde::Serialize;

/// Card network inferred from the BIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardBrand {
    Visa,
    MasterCard,
    Amex,
    Discover,
    Unknown,
}

impl CardBrand {
    /// Display name, as it appears in exports and API responses.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::Amex => "Amex",
            Self::Discover => "Discover",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a BIN (or any card number) by its leading digits.
///
/// Rules are evaluated in order; the first match wins:
/// `4` is Visa, `5` is MasterCard, `34`/`37` is Amex, `6` is Discover.
///
/// ```
/// use cardgen_core::brand::{classify_brand, CardBrand};
///
/// assert_eq!(classify_brand("411111"), CardBrand::Visa);
/// assert_eq!(classify_brand("370000"), CardBrand::Amex);
/// ```
#[must_use]
pub fn classify_brand(bin: &str) -> CardBrand {
    let bytes = bin.as_bytes();
    match bytes {
        [b'4', ..] => CardBrand::Visa,
        [b'5', ..] => CardBrand::MasterCard,
        [b'3', b'4' | b'7', ..] => CardBrand::Amex,
        [b'6', ..] => CardBrand::Discover,
        _ => CardBrand::Unknown,
    }
}
