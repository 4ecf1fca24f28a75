//! HTTP server module.
//!
//! Serves the router over plain HTTP and drains open connections on
//! SIGTERM/SIGINT before exiting.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
