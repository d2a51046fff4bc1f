use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidPayload | AppError::InvalidEmail => {
                tracing::debug!(error = %self, "Rejected signup payload");
                StatusCode::BAD_REQUEST
            }
            AppError::AlreadyRegistered => {
                tracing::info!("Duplicate waitlist signup");
                StatusCode::CONFLICT
            }
            AppError::StorageNotConfigured | AppError::Database(_) => {
                tracing::error!(error = ?self, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        error_resp(status, self.public_message())
    }
}

fn error_resp(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
