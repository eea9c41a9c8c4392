//! Request logging middleware.

use axum::{body::Body, http::Method, http::Request, middleware::Next, response::Response};
use tracing::info;

/// Logs method, path and response status for each incoming HTTP request.
/// CORS preflight `OPTIONS` requests are passed through silently.
///
/// Apply globally with:
///
/// ```ignore
/// use axum::{Router, middleware::from_fn};
/// use api::middleware::log_request;
///
/// let app = Router::new().layer(from_fn(log_request));
/// ```
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    info!(%method, path, status = %response.status(), "handled request");
    response
}
