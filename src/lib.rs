//! YorkU Course Planner backend.
//!
//! A small HTTP service exposing a greeting and a liveness probe under `/api`.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::{AppConfig, ConfigError, LogFormat};
pub use http::{start_server, ServerError};
pub use routes::create_router;
