use std::time::Instant;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};

/// Paths too noisy to log (probed by load balancers).
const UNLOGGED_PATHS: &[&str] = &["/health"];

/// One log line per request; level follows the status class.
pub async fn request_log_middleware(req: Request<Body>, next: Next) -> Response {
    if UNLOGGED_PATHS.contains(&req.uri().path()) {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let code = status.as_u16();

    if status.is_server_error() {
        error!(%method, path, status = code, elapsed_ms, "request");
    } else if status.is_client_error() {
        warn!(%method, path, status = code, elapsed_ms, "request");
    } else {
        info!(%method, path, status = code, elapsed_ms, "request");
    }

    response
}
