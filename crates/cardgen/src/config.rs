//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use cardgen_core::{CvvMode, ExpiryMode, Expiry, ExportFormat, GenerationOptions};

/// cardgen: synthetic Luhn-valid test card generator.
#[derive(Parser, Debug)]
#[command(name = "cardgen", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Six-digit issuer prefix (BIN).
    #[arg(short, long, default_value = "411111", env = "CARDGEN_BIN")]
    pub bin: String,

    /// Number of cards to generate (1-50).
    #[arg(
        short = 'n',
        long,
        default_value = "10",
        env = "CARDGEN_COUNT",
        allow_negative_numbers = true
    )]
    pub count: i64,

    /// Output format: pipe, split, formatted, or json.
    #[arg(short, long, default_value = "pipe")]
    pub format: ExportFormat,

    /// Use this expiry on every card instead of a random one.
    #[arg(long, value_name = "MM/YY")]
    pub expiry: Option<Expiry>,

    /// Use this three-digit CVV on every card instead of a random one.
    #[arg(long)]
    pub cvv: Option<String>,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only the records).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Pause after each card in the TUI, in milliseconds.
    #[arg(long, default_value = "20")]
    pub delay_ms: u64,

    /// Check card lines from a file ("-" for stdin) instead of generating.
    #[arg(long, value_name = "FILE")]
    pub check: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Seed the random generator for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Expiry and CVV overrides from the flags.
    #[must_use]
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            expiry: self.expiry.map_or(ExpiryMode::Random, |e| ExpiryMode::Fixed {
                month: e.month(),
                year: e.year(),
            }),
            cvv: self
                .cvv
                .clone()
                .map_or(CvvMode::Random, CvvMode::Fixed),
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
