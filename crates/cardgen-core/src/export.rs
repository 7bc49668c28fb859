//! Text export of generated batches.

use std::fmt;
use std::str::FromStr;

use crate::card::GeneratedCard;
use crate::error::CardError;

/// Line format used when exporting a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// `number|MM/YY|cvv`
    #[default]
    Pipe,
    /// `number|MM|YY|cvv`
    Split,
    /// `#01 • 4111 1111 1111 111 • 05/26 • 123 • Visa`
    Formatted,
    /// Pretty-printed JSON array.
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [Self::Pipe, Self::Split, Self::Formatted, Self::Json];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pipe => "pipe",
            Self::Split => "split",
            Self::Formatted => "formatted",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CardError::InvalidOption(format!("unknown export format {s:?}")))
    }
}

/// Render one card as a single line in `format`.
///
/// `Json` renders the card as a compact JSON object.
#[must_use]
pub fn export_line(card: &GeneratedCard, format: ExportFormat) -> String {
    match format {
        ExportFormat::Pipe => format!("{}|{}|{}", card.number(), card.expiry(), card.cvv()),
        ExportFormat::Split => format!(
            "{}|{:02}|{:02}|{}",
            card.number(),
            card.expiry().month(),
            card.expiry().year(),
            card.cvv()
        ),
        ExportFormat::Formatted => format!(
            "#{:02} • {} • {} • {} • {}",
            card.index(),
            card.formatted_number(),
            card.expiry(),
            card.cvv(),
            card.card_type()
        ),
        ExportFormat::Json => serde_json::to_string(card).unwrap_or_default(),
    }
}

/// Render a whole batch, one record per line.
#[must_use]
pub fn export_cards(cards: &[GeneratedCard], format: ExportFormat) -> String {
    if format == ExportFormat::Json {
        return serde_json::to_string_pretty(cards).unwrap_or_else(|_| "[]".to_owned());
    }
    cards
        .iter()
        .map(|card| export_line(card, format))
        .collect::<Vec<_>>()
        .join("\n")
}
