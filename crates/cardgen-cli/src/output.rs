//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use cardgen_core::checker::CheckReport;
use cardgen_core::GeneratedCard;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// One-line description of a batch, e.g. `5 Visa cards from BIN 411111`.
#[must_use]
pub fn batch_summary(cards: &[GeneratedCard]) -> String {
    let Some(first) = cards.first() else {
        return "no cards generated".to_owned();
    };
    let bin = first.number().get(..6).unwrap_or(first.number());
    let noun = if cards.len() == 1 { "card" } else { "cards" };
    format!("{} {} {noun} from BIN {bin}", cards.len(), first.card_type())
}

/// Human-readable lines for a checker report, rejected lines last.
#[must_use]
pub fn report_lines(report: &CheckReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.total + 1);
    for card in &report.accepted {
        lines.push(format!("VALID    {} ({})", card.original, card.brand));
    }
    for rejected in &report.rejected {
        lines.push(format!(
            "INVALID  line {}: {} ({})",
            rejected.line, rejected.text, rejected.reason
        ));
    }
    lines.push(format!(
        "{} checked, {} valid, {} invalid",
        report.total, report.valid, report.invalid
    ));
    lines
}

/// Write exported text to a file, with a trailing newline.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{contents}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardgen_core::checker::check_input;
    use cardgen_core::{CardBrand, Expiry};

    fn card(index: u32) -> GeneratedCard {
        GeneratedCard::new(
            index,
            "411111000000008".into(),
            Expiry::new(1, 25).unwrap(),
            "123".into(),
            CardBrand::Visa,
        )
    }

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn summary_singular_and_plural() {
        assert_eq!(batch_summary(&[card(1)]), "1 Visa card from BIN 411111");
        assert_eq!(
            batch_summary(&[card(1), card(2)]),
            "2 Visa cards from BIN 411111"
        );
        assert_eq!(batch_summary(&[]), "no cards generated");
    }

    #[test]
    fn report_lines_end_with_totals() {
        let report = check_input("4111111111111111\n1234\n");
        let lines = report_lines(&report);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("VALID"));
        assert!(lines[1].contains("line 2"));
        assert_eq!(lines[2], "2 checked, 1 valid, 1 invalid");
    }

    #[test]
    fn write_to_file_appends_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.txt");
        write_to_file(&path, "a|b|c").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a|b|c\n");
    }
}
