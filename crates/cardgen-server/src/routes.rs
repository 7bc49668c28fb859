//! Route handlers.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use cardgen_core::{check_input, generate_batch, CheckReport, GeneratedCard, GenerationRequest};

use crate::error::{ApiError, AMOUNT_MESSAGE};

/// `amount` as sent by the client: an integer, a float (truncated toward
/// zero) or a numeric string. Anything else is rejected with the amount message.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for Amount {
    fn default() -> Self {
        Self::Number(i64::from(cardgen_core::DEFAULT_BATCH_SIZE))
    }
}

impl Amount {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn value(&self) -> Result<i64, ApiError> {
        let invalid = || ApiError::bad_request(AMOUNT_MESSAGE);
        match self {
            Self::Number(n) => Ok(*n),
            Self::Float(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Ok(f.trunc() as i64),
            Self::Text(s) => s.trim().parse().map_err(|_| invalid()),
            Self::Float(_) | Self::Other(_) => Err(invalid()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub bin: String,
    #[serde(default)]
    pub amount: Amount,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub cards: Vec<GeneratedCard>,
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `POST /generate`
pub async fn generate(Json(body): Json<GenerateRequest>) -> Result<Json<GenerateResponse>, ApiError> {
    let request = GenerationRequest::new(body.bin.trim(), body.amount.value()?)?;
    let cards = generate_batch(request.bin(), request.count())?;
    info!(bin = request.bin(), count = cards.len(), "Generated batch");
    Ok(Json(GenerateResponse { cards }))
}

/// `POST /check`
pub async fn check(Json(body): Json<CheckRequest>) -> Json<CheckReport> {
    let report = check_input(&body.input);
    info!(total = report.total, valid = report.valid, "Checked input");
    Json(report)
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
