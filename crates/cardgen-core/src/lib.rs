//! # cardgen-core
//!
//! Core library for cardgen, a generator of synthetic Luhn-valid card
//! records for development and testing. Front ends (CLI, TUI, HTTP API)
//! all go through [`batch::generate_batch`] or [`batch::BatchGenerator`].

pub mod batch;
pub mod brand;
pub mod card;
pub mod checker;
pub mod constants;
pub mod error;
pub mod export;
pub mod format;
pub mod interfaces;
pub mod luhn;
pub mod number;
pub mod observer;
pub mod observers;
pub mod options;
pub mod progress;
pub mod request;

// Re-exports
pub use batch::{generate_batch, BatchGenerator};
pub use brand::{classify_brand, CardBrand};
pub use card::{Expiry, GeneratedCard};
pub use checker::{check_input, parse_card_line, CardLine, CheckReport};
pub use constants::{exit_codes, DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE, MIN_BATCH_SIZE};
pub use error::CardError;
pub use export::{export_cards, ExportFormat};
pub use format::format_grouped;
pub use interfaces::ResultPresenter;
pub use luhn::{compute_check_digit, is_luhn_valid};
pub use observer::{ProgressObserver, ProgressSubject};
pub use options::{CvvMode, ExpiryMode, GenerationOptions};
pub use progress::{CancellationToken, ProgressUpdate};
pub use request::GenerationRequest;
