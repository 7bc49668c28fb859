//! Bridge between batch progress and TUI messages.

use std::time::Duration;

use crossbeam_channel::Sender;

use cardgen_core::observer::ProgressObserver;
use cardgen_core::progress::ProgressUpdate;

use crate::messages::TuiMessage;

/// Core-level progress observer that forwards updates to the TUI channel.
pub struct TuiBridgeObserver {
    tx: Sender<TuiMessage>,
    generation: u64,
}

impl TuiBridgeObserver {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>, generation: u64) -> Self {
        Self { tx, generation }
    }
}

impl ProgressObserver for TuiBridgeObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if update.done {
            return;
        }
        let _ = self.tx.try_send(TuiMessage::Progress {
            generation: self.generation,
            current: update.current,
            total: update.total,
            progress: update.progress,
        });
    }
}

/// Sleeps after each card so the progress gauge visibly advances.
pub struct PacingObserver {
    delay: Duration,
}

impl PacingObserver {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl ProgressObserver for PacingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if !update.done && !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}
