//! HTTP surface: routes, handlers, and error responses.

pub mod departments;
pub mod error;
pub mod extract;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::service::DepartmentService;

pub use error::ErrorMessage;

/// Shared handler state.
pub type AppState = Arc<DepartmentService>;

/// Build the full axum router.
pub fn build_router(service: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/departments", get(departments::list).post(departments::create))
        .route(
            "/departments/:id",
            get(departments::get_by_id)
                .put(departments::update)
                .delete(departments::delete),
        )
        .route("/departments/name/:name", get(departments::get_by_name))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// GET /: liveness greeting.
async fn index() -> &'static str {
    "First API"
}
