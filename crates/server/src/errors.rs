use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use service::errors::ServiceError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be decoded as JSON.
    #[error(transparent)]
    Json(#[from] JsonRejection),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Json(rejection) => rejection.status(),
            ApiError::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match &self {
            ApiError::Json(rejection) => rejection.body_text(),
            ApiError::Service(e) => e.to_string(),
        };
        if status.is_server_error() {
            error!(event = "request_failed", %status, error = %msg, "request failed");
        } else {
            warn!(event = "request_rejected", %status, error = %msg, "request rejected");
        }
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}
