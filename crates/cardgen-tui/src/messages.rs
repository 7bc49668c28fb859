//! TUI message types (Elm Messages).

use std::time::Duration;

use cardgen_core::GeneratedCard;

/// Messages that drive the TUI update cycle.
///
/// Messages from a worker carry the generation they belong to; the model
/// drops any whose generation is no longer current.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Progress update from the worker.
    Progress {
        generation: u64,
        current: u32,
        total: u32,
        progress: f64,
    },
    /// A batch finished.
    BatchComplete {
        generation: u64,
        cards: Vec<GeneratedCard>,
        duration: Duration,
    },
    /// A batch stopped at a cancellation checkpoint.
    Cancelled { generation: u64 },
    /// A batch failed with an error other than cancellation.
    Error { generation: u64, message: String },
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press event forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_variants() {
        let msg = TuiMessage::Progress {
            generation: 1,
            current: 1,
            total: 2,
            progress: 0.5,
        };
        assert!(matches!(msg, TuiMessage::Progress { .. }));

        let msg = TuiMessage::BatchComplete {
            generation: 1,
            cards: Vec::new(),
            duration: Duration::ZERO,
        };
        assert!(matches!(msg, TuiMessage::BatchComplete { .. }));

        let msg = TuiMessage::Resize {
            width: 80,
            height: 24,
        };
        assert!(matches!(msg, TuiMessage::Resize { .. }));

        let msg = TuiMessage::Error {
            generation: 2,
            message: "test error".to_string(),
        };
        assert!(matches!(msg, TuiMessage::Error { generation: 2, .. }));
    }
}
