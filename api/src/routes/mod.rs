//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe (public)
//! - `/mark-answer` → the marking endpoint (public)

use crate::routes::{health::health_routes, mark::mark_routes};
use axum::Router;

pub mod health;
pub mod mark;

/// Builds the application router mounted under `/api`.
pub fn routes() -> Router {
    Router::new()
        .nest("/health", health_routes())
        .merge(mark_routes())
}
