//! Batch generation: the single entry point shared by every front end.
//!
//! [`generate_batch`] is the plain contract (BIN and count in, ordered cards
//! out). [`BatchGenerator`] adds progress reporting, cancellation and fixed
//! expiry/CVV overrides.

use rand::Rng;
use tracing::debug;

use crate::brand::classify_brand;
use crate::card::GeneratedCard;
use crate::error::CardError;
use crate::number::generate_card_number;
use crate::observer::ProgressObserver;
use crate::observers::NoOpObserver;
use crate::options::GenerationOptions;
use crate::progress::{CancellationToken, ProgressUpdate};
use crate::request::GenerationRequest;

/// Stateless batch generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchGenerator;

impl BatchGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate `request.count()` cards in index order.
    ///
    /// Cancellation is checked before each card; a cancelled run returns
    /// [`CardError::Cancelled`] and the cards built so far are dropped.
    /// The observer sees one update per card followed by a `done` update.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        options: &GenerationOptions,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        rng: &mut R,
    ) -> Result<Vec<GeneratedCard>, CardError> {
        options.validate()?;

        let total = request.count();
        let brand = classify_brand(request.bin());
        debug!(bin = request.bin(), count = total, %brand, "Generating batch");

        let mut cards = Vec::with_capacity(total as usize);
        for index in 1..=total {
            cancel.check_cancelled()?;

            let number = generate_card_number(request.bin(), rng)?;
            let expiry = options.next_expiry(rng)?;
            let cvv = options.next_cvv(rng);
            cards.push(GeneratedCard::new(index, number, expiry, cvv, brand));

            observer.on_progress(&ProgressUpdate::new(index, total));
        }

        observer.on_progress(&ProgressUpdate::done(total));
        Ok(cards)
    }
}

/// Generate `count` cards for `bin` with random expiry and CVV.
///
/// Both arguments are validated first; invalid input yields no cards.
///
/// ```
/// let cards = cardgen_core::batch::generate_batch("411111", 3).unwrap();
/// assert_eq!(cards.len(), 3);
/// assert!(cards.iter().all(|c| cardgen_core::luhn::is_luhn_valid(c.number())));
/// ```
pub fn generate_batch(bin: &str, count: u32) -> Result<Vec<GeneratedCard>, CardError> {
    let request = GenerationRequest::new(bin, i64::from(count))?;
    BatchGenerator::new().generate(
        &request,
        &GenerationOptions::default(),
        &CancellationToken::new(),
        &NoOpObserver::new(),
        &mut rand::rng(),
    )
}
