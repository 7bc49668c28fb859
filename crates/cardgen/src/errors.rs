//! Error handling and exit codes.

use cardgen_cli::ui::print_error;
use cardgen_core::constants::exit_codes;
use cardgen_core::CardError;

/// Failures that only exist at the application level.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{invalid} of {total} lines failed the check")]
    CheckFailed { invalid: usize, total: usize },
}

/// Exit code for a core error.
pub fn handle_error(err: &CardError) -> i32 {
    if err.is_validation() {
        return exit_codes::ERROR_CONFIG;
    }
    match err {
        CardError::Cancelled => exit_codes::ERROR_CANCELED,
        _ => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error returned by [`crate::app::run`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(card_err) = err.downcast_ref::<CardError>() {
        return handle_error(card_err);
    }
    match err.downcast_ref::<AppError>() {
        Some(AppError::CheckFailed { .. }) => exit_codes::ERROR_CHECK_FAILED,
        None => exit_codes::ERROR_GENERIC,
    }
}

/// Print `err` to stderr and return its exit code.
///
/// A failed check was already reported line by line, so quiet mode stays silent.
pub fn report(err: &anyhow::Error, quiet: bool) -> i32 {
    let check_failed = matches!(err.downcast_ref::<AppError>(), Some(AppError::CheckFailed { .. }));
    if !(quiet && check_failed) {
        print_error(&format!("{err:#}"));
    }
    exit_code(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&CardError::Cancelled), 130);
        assert_eq!(handle_error(&CardError::InvalidCount(0)), 4);
        assert_eq!(handle_error(&CardError::InvalidBin("x".into())), 4);
        assert_eq!(handle_error(&CardError::InvalidOption("x".into())), 4);
        assert_eq!(handle_error(&CardError::Generation("x".into())), 1);
    }

    #[test]
    fn anyhow_downcasts() {
        let err = anyhow::Error::from(CardError::InvalidCount(51));
        assert_eq!(exit_code(&err), exit_codes::ERROR_CONFIG);

        let err = anyhow::Error::from(AppError::CheckFailed { invalid: 1, total: 2 });
        assert_eq!(exit_code(&err), exit_codes::ERROR_CHECK_FAILED);

        let err = anyhow::anyhow!("disk full");
        assert_eq!(exit_code(&err), exit_codes::ERROR_GENERIC);
    }

    #[test]
    fn context_preserves_code() {
        let err = anyhow::Error::from(CardError::Cancelled).context("while generating");
        assert_eq!(exit_code(&err), exit_codes::ERROR_CANCELED);
    }
}
