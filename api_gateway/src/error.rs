use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shortener_service::ShortenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Shorten(#[from] ShortenError),
}

impl From<&ApiError> for StatusCode {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Shorten(ShortenError::InvalidUrl) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Shorten(ShortenError::SessionLimit) => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from(&self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
