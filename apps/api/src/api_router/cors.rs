use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use parkwatch_core::AppError;
use tower_http::cors::CorsLayer;

pub(super) fn build_cors_layer(cors_origin: &str) -> Result<CorsLayer, AppError> {
    Ok(CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(cors_origin)
                .map_err(|error| AppError::Validation(format!("invalid CORS_ORIGIN: {error}")))?,
        )
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]))
}
