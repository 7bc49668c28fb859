//! Error type shared by every generation entry point.

/// Error type for card generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    /// The issuer prefix is not exactly six decimal digits.
    #[error("{0}")]
    InvalidBin(String),

    /// The requested batch size is outside the accepted range.
    #[error("count must be between 1 and 50, got {0}")]
    InvalidCount(i64),

    /// A fixed expiry or CVV override is malformed.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// Generation was cancelled before the batch completed.
    #[error("generation cancelled")]
    Cancelled,

    /// Any other failure while producing a batch.
    #[error("generation failed: {0}")]
    Generation(String),
}

impl CardError {
    /// Whether the error was caused by caller input rather than by generation itself.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidBin(_) | Self::InvalidCount(_) | Self::InvalidOption(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_error_display() {
        let err = CardError::InvalidBin("BIN must be exactly 6 digits".into());
        assert_eq!(err.to_string(), "BIN must be exactly 6 digits");

        let err = CardError::InvalidCount(51);
        assert_eq!(err.to_string(), "count must be between 1 and 50, got 51");

        let err = CardError::Cancelled;
        assert_eq!(err.to_string(), "generation cancelled");
    }

    #[test]
    fn validation_classification() {
        assert!(CardError::InvalidBin(String::new()).is_validation());
        assert!(CardError::InvalidCount(0).is_validation());
        assert!(CardError::InvalidOption("cvv".into()).is_validation());
        assert!(!CardError::Cancelled.is_validation());
        assert!(!CardError::Generation("boom".into()).is_validation());
    }
}
