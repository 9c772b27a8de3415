//! HTTP route handlers.
//!
//! Two fixed routes: the health check and the greeting page. Anything
//! else falls through to axum's default 404. Requests are wrapped in a
//! request-ID span by middleware for log correlation.
//!
//! The handlers are stateless - neither route reads anything beyond the
//! request itself, so the router carries no shared state.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_id_layer;

/// Creates the axum router with all routes.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
