//! Offline validation of pasted card lines.
//!
//! Each non-blank line is either a bare number or `number|MM|YY|cvv`.
//! A line is accepted when its number (whitespace removed) has 13 to 19
//! digits and passes the Luhn checksum.

use std::fmt;

use serde::Serialize;

use crate::brand::{classify_brand, CardBrand};
use crate::constants::{MAX_CHECKED_LENGTH, MIN_CHECKED_LENGTH};
use crate::luhn::is_luhn_valid;

/// A line that passed the checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLine {
    pub number: String,
    /// `MM|YY` when both parts were present.
    pub expiry: Option<String>,
    pub cvv: Option<String>,
    pub brand: CardBrand,
    pub original: String,
}

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    NotNumeric,
    BadLength,
    FailsLuhn,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNumeric => f.write_str("number contains non-digit characters"),
            Self::BadLength => write!(
                f,
                "number must have {MIN_CHECKED_LENGTH} to {MAX_CHECKED_LENGTH} digits"
            ),
            Self::FailsLuhn => f.write_str("number fails the Luhn checksum"),
        }
    }
}

/// A line that failed the checker, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedLine {
    pub line: usize,
    pub text: String,
    pub reason: RejectReason,
}

/// Outcome of checking a block of input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub accepted: Vec<CardLine>,
    pub rejected: Vec<RejectedLine>,
}

impl CheckReport {
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Classify a single line.
pub fn classify_line(line: &str) -> Result<CardLine, RejectReason> {
    let trimmed = line.trim();
    let mut parts = trimmed.split('|');
    let raw_number = parts.next().unwrap_or_default();
    let number: String = raw_number.chars().filter(|c| !c.is_whitespace()).collect();

    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RejectReason::NotNumeric);
    }
    if !(MIN_CHECKED_LENGTH..=MAX_CHECKED_LENGTH).contains(&number.len()) {
        return Err(RejectReason::BadLength);
    }
    if !is_luhn_valid(&number) {
        return Err(RejectReason::FailsLuhn);
    }

    fn non_empty(s: Option<&str>) -> Option<&str> {
        s.map(str::trim).filter(|s| !s.is_empty())
    }
    let month = non_empty(parts.next());
    let year = non_empty(parts.next());
    let cvv = non_empty(parts.next()).map(str::to_owned);
    let expiry = match (month, year) {
        (Some(m), Some(y)) => Some(format!("{m}|{y}")),
        _ => None,
    };

    Ok(CardLine {
        brand: classify_brand(&number),
        number,
        expiry,
        cvv,
        original: trimmed.to_owned(),
    })
}

/// Parse one line, discarding the rejection reason.
#[must_use]
pub fn parse_card_line(line: &str) -> Option<CardLine> {
    classify_line(line).ok()
}

/// Check every non-blank line of `input`.
#[must_use]
pub fn check_input(input: &str) -> CheckReport {
    let mut report = CheckReport::default();
    for (i, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        report.total += 1;
        match classify_line(line) {
            Ok(card) => report.accepted.push(card),
            Err(reason) => report.rejected.push(RejectedLine {
                line: i + 1,
                text: line.trim().to_owned(),
                reason,
            }),
        }
    }
    report.valid = report.accepted.len();
    report.invalid = report.rejected.len();
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number_accepted() {
        let card = parse_card_line("4111111111111111").unwrap();
        assert_eq!(card.number, "4111111111111111");
        assert_eq!(card.brand, CardBrand::Visa);
        assert!(card.expiry.is_none());
        assert!(card.cvv.is_none());
    }

    #[test]
    fn full_line_accepted() {
        let card = parse_card_line(" 5500005555555559|01|25|123 ").unwrap();
        assert_eq!(card.number, "5500005555555559");
        assert_eq!(card.expiry.as_deref(), Some("01|25"));
        assert_eq!(card.cvv.as_deref(), Some("123"));
        assert_eq!(card.brand, CardBrand::MasterCard);
        assert_eq!(card.original, "5500005555555559|01|25|123");
    }

    #[test]
    fn spaces_inside_number_ignored() {
        let card = parse_card_line("4111 1111 1111 1111").unwrap();
        assert_eq!(card.number, "4111111111111111");
    }

    #[test]
    fn padded_fields_trimmed() {
        let card = parse_card_line("4111111111111111| 07 |  29|  321  ").unwrap();
        assert_eq!(card.expiry.as_deref(), Some("07|29"));
        assert_eq!(card.cvv.as_deref(), Some("321"));

        let card = parse_card_line("4111111111111111|  | 29|").unwrap();
        assert!(card.expiry.is_none());
        assert!(card.cvv.is_none());
    }

    #[test]
    fn partial_expiry_dropped() {
        let card = parse_card_line("4111111111111111|01").unwrap();
        assert!(card.expiry.is_none());
    }

    #[test]
    fn rejection_reasons() {
        assert_eq!(classify_line("4111-1111"), Err(RejectReason::NotNumeric));
        assert_eq!(classify_line("|01|25|123"), Err(RejectReason::NotNumeric));
        assert_eq!(classify_line("424242424242"), Err(RejectReason::BadLength));
        assert_eq!(classify_line("41111111111111111111"), Err(RejectReason::BadLength));
        assert_eq!(classify_line("4111111111111112"), Err(RejectReason::FailsLuhn));
    }

    #[test]
    fn report_counts_and_line_numbers() {
        let input = "4111111111111111\n\n4111111111111112|01|25|123\n  \n378282246310005|12|27|999\n";
        let report = check_input(input);
        assert_eq!(report.total, 3);
        assert_eq!(report.valid, 2);
        assert_eq!(report.invalid, 1);
        assert!(!report.all_valid());
        assert_eq!(report.rejected[0].line, 3);
        assert_eq!(report.rejected[0].reason, RejectReason::FailsLuhn);
        assert_eq!(report.accepted[1].brand, CardBrand::Amex);
    }

    #[test]
    fn empty_input() {
        let report = check_input("");
        assert_eq!(report.total, 0);
        assert!(report.all_valid());
    }
}
