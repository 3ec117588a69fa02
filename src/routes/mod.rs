//! HTTP route handlers.
//!
//! Two fixed JSON endpoints, each with its own Cache-Control header: the
//! greeting payload never changes and may be held briefly by upstream
//! caches, while the health probe must always reach the live process.
//! Anything else falls through to axum's default 404 handler.

pub mod greeting;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use serde::Serialize;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_GREETING, CACHE_CONTROL_HEALTH};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Fixed response payload shape shared by both endpoints.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// Creates the axum router with both routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    let greeting_routes = Router::new()
        .route("/", get(greeting::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_GREETING),
        ));

    // Probes must see the live process, never a cached response
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(greeting_routes)
        .merge(health_routes)
        .with_state(state)
        // Outermost layer so the request span covers everything below it
        .layer(middleware::from_fn(request_id_layer))
}
