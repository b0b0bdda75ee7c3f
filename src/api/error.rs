//! Mapping of [`AppError`] onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Upper-snake status name, e.g. `NOT_FOUND`.
    pub status: String,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status_name(status),
            message: message.into(),
        }
    }
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(ErrorMessage::new(status, self.to_string()))).into_response()
    }
}

fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names() {
        assert_eq!(status_name(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(status_name(StatusCode::BAD_REQUEST), "BAD_REQUEST");
        assert_eq!(status_name(StatusCode::INTERNAL_SERVER_ERROR), "INTERNAL_SERVER_ERROR");
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::not_found("gone").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::validation("bad").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Database(sea_orm::DbErr::Custom("down".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_body() {
        let body = ErrorMessage::new(StatusCode::NOT_FOUND, "Department Not Available");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "status": "NOT_FOUND", "message": "Department Not Available" })
        );
    }
}
