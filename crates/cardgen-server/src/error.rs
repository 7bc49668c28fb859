//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use cardgen_core::CardError;

pub const BIN_MESSAGE: &str = "BIN must be exactly 6 digits";
pub const AMOUNT_MESSAGE: &str = "Amount must be between 1 and 50";
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error returned by a handler, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// A 500 whose detail is logged but never sent to the client.
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        error!(%detail, "Request failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: INTERNAL_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<CardError> for ApiError {
    fn from(err: CardError) -> Self {
        match err {
            CardError::InvalidBin(_) => Self::bad_request(BIN_MESSAGE),
            CardError::InvalidCount(_) => Self::bad_request(AMOUNT_MESSAGE),
            CardError::InvalidOption(msg) => Self::bad_request(msg),
            other => Self::internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_client_error() {
            warn!(status = %self.status, error = %self.message, "Rejected request");
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
