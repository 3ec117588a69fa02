//! Handler for the root greeting endpoint.

use axum::Json;

use super::Message;

/// Returns the fixed greeting payload. No inputs consulted, no side effects.
pub async fn index() -> Json<Message> {
    Json(Message {
        message: "Hello World",
    })
}
