//! Per-batch overrides for the random expiry and CVV fields.

use rand::Rng;

use crate::card::{is_valid_cvv, random_cvv, Expiry};
use crate::error::CardError;

/// How each card's expiry is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpiryMode {
    /// Uniform month, year in the default window.
    #[default]
    Random,
    /// The same month and two-digit year on every card.
    Fixed { month: u8, year: u8 },
}

/// How each card's CVV is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CvvMode {
    /// Three independent random digits.
    #[default]
    Random,
    /// The same three-digit value on every card.
    Fixed(String),
}

/// Options for batch generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    pub expiry: ExpiryMode,
    pub cvv: CvvMode,
}

impl GenerationOptions {
    /// Reject malformed fixed values.
    pub fn validate(&self) -> Result<(), CardError> {
        if let ExpiryMode::Fixed { month, year } = self.expiry {
            Expiry::new(month, year)?;
        }
        if let CvvMode::Fixed(cvv) = &self.cvv {
            if !is_valid_cvv(cvv) {
                return Err(CardError::InvalidOption(format!(
                    "CVV must be exactly 3 digits, got {cvv:?}"
                )));
            }
        }
        Ok(())
    }

    /// Expiry for the next card.
    pub fn next_expiry<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Expiry, CardError> {
        match self.expiry {
            ExpiryMode::Random => Ok(Expiry::random(rng)),
            ExpiryMode::Fixed { month, year } => Expiry::new(month, year),
        }
    }

    /// CVV for the next card.
    pub fn next_cvv<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match &self.cvv {
            CvvMode::Random => random_cvv(rng),
            CvvMode::Fixed(cvv) => cvv.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_options_are_random() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.expiry, ExpiryMode::Random);
        assert_eq!(opts.cvv, CvvMode::Random);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn fixed_values_are_reused() {
        let opts = GenerationOptions {
            expiry: ExpiryMode::Fixed { month: 3, year: 31 },
            cvv: CvvMode::Fixed("007".into()),
        };
        opts.validate().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..5 {
            assert_eq!(opts.next_expiry(&mut rng).unwrap().to_string(), "03/31");
            assert_eq!(opts.next_cvv(&mut rng), "007");
        }
    }

    #[test]
    fn invalid_fixed_values_rejected() {
        let bad_month = GenerationOptions {
            expiry: ExpiryMode::Fixed { month: 13, year: 25 },
            ..Default::default()
        };
        assert!(matches!(bad_month.validate(), Err(CardError::InvalidOption(_))));

        let bad_cvv = GenerationOptions {
            cvv: CvvMode::Fixed("12".into()),
            ..Default::default()
        };
        assert!(matches!(bad_cvv.validate(), Err(CardError::InvalidOption(_))));

        let alpha_cvv = GenerationOptions {
            cvv: CvvMode::Fixed("1a3".into()),
            ..Default::default()
        };
        assert!(alpha_cvv.validate().is_err());
    }
}
