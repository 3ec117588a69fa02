//! Request ID middleware for correlating logs with requests.
//!
//! Generates a UUID v4 for each incoming request and wraps the request in a
//! tracing span carrying it, so every log line emitted while handling the
//! request can be correlated.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Middleware that generates a request ID and creates a request span.
///
/// Outermost layer, so the span covers all request processing. Emits one
/// completion line with the response status and latency.
pub async fn request_id_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let span = tracing::info_span!("request", request_id = %request_id, %method, %path);
    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        tracing::info!(
            status = response.status().as_u16(),
            latency_ms = start.elapsed().as_millis() as u64,
            "request completed"
        );
        response
    }
    .instrument(span)
    .await
}
