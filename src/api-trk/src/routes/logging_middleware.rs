use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs each route access with its outcome; the level tracks the status
/// class.
pub async fn log_route_access(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), duration_ms);
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), duration_ms);
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), duration_ms);
    }

    response
}
