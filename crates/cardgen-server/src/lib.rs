//! # cardgen-server
//!
//! JSON HTTP API over `cardgen-core`: batch generation, input checking and
//! a health check.

pub mod config;
pub mod error;
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the API router.
pub fn app() -> Router {
    Router::new()
        .route("/generate", post(routes::generate))
        .route("/check", post(routes::check))
        .route("/health", get(routes::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(v) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn generate(body: Value) -> (StatusCode, Value) {
        send(Method::POST, "/generate", Some(body)).await
    }

    #[tokio::test]
    async fn generate_returns_cards() {
        let (status, body) = generate(json!({"bin": "411111", "amount": 5})).await;
        assert_eq!(status, StatusCode::OK);
        let cards = body["cards"].as_array().unwrap();
        assert_eq!(cards.len(), 5);
        for (i, card) in cards.iter().enumerate() {
            let number = card["number"].as_str().unwrap();
            assert_eq!(number.len(), 15);
            assert!(number.starts_with("411111"));
            assert!(cardgen_core::is_luhn_valid(number));
            assert_eq!(card["type"], "Visa");
            assert_eq!(card["index"], i + 1);
            let expiry = card["expiry"].as_str().unwrap();
            assert_eq!(expiry.len(), 5);
            assert_eq!(&expiry[2..3], "/");
            assert_eq!(card["cvv"].as_str().unwrap().len(), 3);
        }
    }

    #[tokio::test]
    async fn amount_defaults_to_ten() {
        let (status, body) = generate(json!({"bin": "510000"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cards"].as_array().unwrap().len(), 10);
        assert_eq!(body["cards"][0]["type"], "MasterCard");
    }

    #[tokio::test]
    async fn amount_as_string_and_bin_trimmed() {
        let (status, body) = generate(json!({"bin": "  371449 ", "amount": "3"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cards"].as_array().unwrap().len(), 3);
        assert_eq!(body["cards"][0]["type"], "Amex");
    }

    #[tokio::test]
    async fn bad_bin_rejected() {
        for bin in ["41111", "4111111", "41a111", ""] {
            let (status, body) = generate(json!({"bin": bin, "amount": 1})).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "bin {bin:?}");
            assert_eq!(body["error"], "BIN must be exactly 6 digits");
        }
    }

    #[tokio::test]
    async fn bad_amount_rejected() {
        for amount in [json!(0), json!(51), json!(-5), json!("abc")] {
            let (status, body) = generate(json!({"bin": "411111", "amount": amount})).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "amount {amount}");
            assert_eq!(body["error"], "Amount must be between 1 and 50");
        }
    }

    #[tokio::test]
    async fn amount_as_float_is_truncated() {
        let (status, body) = generate(json!({"bin": "411111", "amount": 10.0})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cards"].as_array().unwrap().len(), 10);

        let (status, body) = generate(json!({"bin": "411111", "amount": 2.9})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cards"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn non_numeric_amount_types_rejected() {
        for amount in [json!(true), json!(null), json!([5]), json!({"n": 5}), json!(1e300)] {
            let (status, body) = generate(json!({"bin": "411111", "amount": amount})).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "amount {amount}");
            assert_eq!(body["error"], "Amount must be between 1 and 50");
        }
    }

    #[tokio::test]
    async fn malformed_json_is_client_error() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn check_reports_valid_and_invalid() {
        let (status, body) = send(
            Method::POST,
            "/check",
            Some(json!({"input": "4111111111111111|12|25\n1234\n"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["valid"], 1);
        assert_eq!(body["invalid"], 1);
        assert_eq!(body["accepted"][0]["brand"], "Visa");
    }

    #[tokio::test]
    async fn health() {
        let (status, body) = send(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://example.test")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (status, _) = send(Method::GET, "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
