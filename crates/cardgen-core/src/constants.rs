//! Constants for card generation limits and formatting.

/// Length of every synthesized card number, check digit included.
///
/// Real networks use 13 to 19 digits; generated numbers are always 15.
pub const CARD_NUMBER_LENGTH: usize = 15;

/// Number of digits in an issuer prefix (BIN).
pub const BIN_LENGTH: usize = 6;

/// Smallest batch a caller may request.
pub const MIN_BATCH_SIZE: u32 = 1;

/// Largest batch a caller may request.
pub const MAX_BATCH_SIZE: u32 = 50;

/// Batch size used when a caller does not specify one.
pub const DEFAULT_BATCH_SIZE: u32 = 10;

/// First two-digit expiry year that may be drawn (inclusive).
pub const EXPIRY_YEAR_MIN: u8 = 24;

/// Last two-digit expiry year that may be drawn (inclusive).
pub const EXPIRY_YEAR_MAX: u8 = 28;

/// Number of digits in a generated CVV.
pub const CVV_LENGTH: usize = 3;

/// Width of a digit group in the display form of a card number.
pub const GROUP_WIDTH: usize = 4;

/// Shortest card number accepted by the line checker.
pub const MIN_CHECKED_LENGTH: usize = 13;

/// Longest card number accepted by the line checker.
pub const MAX_CHECKED_LENGTH: usize = 19;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The line checker rejected at least one line.
    pub const ERROR_CHECK_FAILED: i32 = 3;
    /// Invalid input or configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Generation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
