//! Extractors whose rejections are reported as [`AppError`].

use axum::extract::{FromRequest, FromRequestParts, rejection::JsonRejection, rejection::PathRejection};

use crate::error::AppError;

/// JSON request body. Malformed bodies become a validation error.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters. Unparseable segments become a validation error.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}
