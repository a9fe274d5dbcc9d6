//! HTTP error mapping for core errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use margindesk_core::market_data::MarketDataError;
use margindesk_core::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper turning core errors into HTTP responses. The core only
/// distinguishes "data is missing" from "I/O failed"; the mapping here adds
/// the transport-level split (404 vs 500), plus 400 for bad input and 502
/// for upstream feed failures.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            err if err.is_missing_data() => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::MarketData(MarketDataError::NotFound(_)) => StatusCode::NOT_FOUND,
            Error::MarketData(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {}", self.0);
        }

        let body = Json(json!({ "detail": self.0.to_string() }));
        (status, body).into_response()
    }
}
