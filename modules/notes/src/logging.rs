//! Request logging middleware.

use axum::extract::Request;
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

/// Logs one line per request: `METHOD URI STATUS LENGTH - TIME ms`
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let length = response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    log::info!(
        "{} {} {} {} - {:.3} ms",
        method,
        uri,
        response.status().as_u16(),
        length,
        start.elapsed().as_secs_f64() * 1000.0
    );

    response
}
