//! Health check endpoint for container orchestration.
//!
//! A liveness probe that returns 200 OK whenever the process can answer HTTP.

use crate::config::HEALTH_MESSAGE;

/// Health check handler.
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}
