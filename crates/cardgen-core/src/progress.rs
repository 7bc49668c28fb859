//! Progress tracking types and utilities.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::CardError;

/// Progress update sent from the batch generator to observers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    /// Cards produced so far.
    pub current: u32,
    /// Cards requested.
    pub total: u32,
    /// Current progress as a fraction in [0.0, 1.0].
    pub progress: f64,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create an update for `current` of `total` cards.
    #[must_use]
    pub fn new(current: u32, total: u32) -> Self {
        let progress = if total == 0 {
            0.0
        } else {
            f64::from(current) / f64::from(total)
        };
        Self {
            current,
            total,
            progress,
            done: false,
        }
    }

    /// Create a completion update.
    #[must_use]
    pub fn done(total: u32) -> Self {
        Self {
            current: total,
            total,
            progress: 1.0,
            done: true,
        }
    }
}

/// Cooperative cancellation token.
///
/// Clones share state, so a token handed to a worker thread can be cancelled
/// from the thread that spawned it.
///
/// # Example
/// ```
/// use cardgen_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(token.check_cancelled().is_ok());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check for cancellation, returning an error if cancelled.
    pub fn check_cancelled(&self) -> Result<(), CardError> {
        if self.is_cancelled() {
            Err(CardError::Cancelled)
        } else {
            Ok(())
        }
    }
}
