//! Health check endpoint for container orchestration.
//!
//! A liveness probe that returns 200 OK when the process is serving. Used by
//! Kubernetes, systemd, and load balancers to verify the service is alive.

use axum::Json;

use super::Message;

/// Health check handler.
///
/// Only checks that the process can respond to HTTP; in the backed variant
/// there is no dependency probing behind it.
pub async fn health() -> Json<Message> {
    Json(Message {
        message: "Server is running",
    })
}
