//! Presentation interfaces implemented by the front ends.

use std::time::Duration;

use crate::card::GeneratedCard;
use crate::checker::CheckReport;
use crate::export::ExportFormat;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a generated batch in the requested export format.
    fn present_batch(&self, cards: &[GeneratedCard], format: ExportFormat, duration: Duration);

    /// Present the outcome of checking pasted card lines.
    fn present_report(&self, report: &CheckReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}
