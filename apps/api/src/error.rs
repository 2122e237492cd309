use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use parkwatch_core::AppError;
use serde::Serialize;
use tracing::warn;
use ts_rs::TS;

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    error: String,
}

/// HTTP API error wrapper around core application errors.
///
/// Every failure is reported as 500; the browser client only needs the message.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        warn!(error = %message, "request failed");

        let payload = Json(ErrorResponse { error: message });

        (StatusCode::INTERNAL_SERVER_ERROR, payload).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;
