//! HTTP route handlers.
//!
//! All routes live under `/api`, each with its own Cache-Control header.
//! Unknown paths and unsupported methods fall through to axum's default
//! 404 and 405 responses.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod hello;

use axum::{
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{API_PREFIX, CACHE_CONTROL_HEALTH, CACHE_CONTROL_HELLO};
use crate::middleware::request_id_layer;

/// Registers one API route with its Cache-Control header and logs it.
fn api_route(path: &str, method_router: MethodRouter, cache_control: &'static str) -> Router {
    tracing::info!(
        path = %format!("{}{}", API_PREFIX, path),
        cache_control,
        "Registered route"
    );

    Router::new()
        .route(path, method_router)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(cache_control),
        ))
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router() -> Router {
    let api_routes = Router::new()
        .merge(api_route("/hello", get(hello::hello), CACHE_CONTROL_HELLO))
        // Health check - never cached, always fresh for liveness probes
        .merge(api_route("/health", get(health::health), CACHE_CONTROL_HEALTH));

    Router::new()
        .nest(API_PREFIX, api_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
