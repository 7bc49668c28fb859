//! Validated batch requests.

use crate::constants::{BIN_LENGTH, MAX_BATCH_SIZE, MIN_BATCH_SIZE};
use crate::error::CardError;

/// Message for a BIN containing anything but decimal digits.
pub const BIN_NOT_NUMERIC: &str = "BIN must contain only digits";

/// Message for a numeric BIN of the wrong length.
pub const BIN_WRONG_LENGTH: &str = "BIN must be exactly 6 digits";

/// Check that `bin` is exactly [`BIN_LENGTH`] ASCII digits.
///
/// Non-digit input is reported separately from a wrong length.
pub fn validate_bin(bin: &str) -> Result<(), CardError> {
    if !bin.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CardError::InvalidBin(BIN_NOT_NUMERIC.into()));
    }
    if bin.len() != BIN_LENGTH {
        return Err(CardError::InvalidBin(BIN_WRONG_LENGTH.into()));
    }
    Ok(())
}

/// Check that `count` is within the accepted batch range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn validate_count(count: i64) -> Result<u32, CardError> {
    if count < i64::from(MIN_BATCH_SIZE) || count > i64::from(MAX_BATCH_SIZE) {
        return Err(CardError::InvalidCount(count));
    }
    Ok(count as u32)
}

/// A BIN and batch size that have passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    bin: String,
    count: u32,
}

impl GenerationRequest {
    /// Validate and build a request.
    ///
    /// `bin` is taken verbatim; callers that accept free-form input trim it first.
    pub fn new(bin: &str, count: i64) -> Result<Self, CardError> {
        validate_bin(bin)?;
        let count = validate_count(count)?;
        Ok(Self {
            bin: bin.to_owned(),
            count,
        })
    }

    #[must_use]
    pub fn bin(&self) -> &str {
        &self.bin
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }
}
