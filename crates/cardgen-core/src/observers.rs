//! Concrete observer implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use crate::observer::ProgressObserver;
use crate::progress::ProgressUpdate;

/// Observer that logs progress updates with temporal throttling.
pub struct LoggingObserver {
    min_interval_ms: u64,
    last_time: AtomicU64,
}

impl LoggingObserver {
    /// Create a new logging observer with the given minimum interval.
    #[must_use]
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_time: AtomicU64::new(0),
        }
    }
}

impl ProgressObserver for LoggingObserver {
    #[allow(clippy::cast_possible_truncation)]
    fn on_progress(&self, update: &ProgressUpdate) {
        if update.done {
            info!(cards = update.total, "Batch complete");
            return;
        }

        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        let last_time = self.last_time.load(Ordering::Relaxed);
        if now.saturating_sub(last_time) < self.min_interval_ms {
            return;
        }

        debug!(
            progress = format!("{:.0}%", update.progress * 100.0),
            card = update.current,
            total = update.total,
            "Progress update"
        );
        self.last_time.store(now, Ordering::Relaxed);
    }
}

/// Discards every update.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_observer_does_nothing() {
        let observer = NoOpObserver::new();
        observer.on_progress(&ProgressUpdate::new(1, 2));
    }

    #[test]
    fn logging_observer_handles_all_updates() {
        let observer = LoggingObserver::new(0);
        for i in 1..=3 {
            observer.on_progress(&ProgressUpdate::new(i, 3));
        }
        observer.on_progress(&ProgressUpdate::done(3));
    }
}
