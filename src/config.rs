//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and defines the
//! response bodies, Cache-Control values, logging defaults and default paths.
//! `AppConfig` is the root configuration struct; every section and field is
//! optional and falls back to a built-in default.

use std::net::SocketAddr;
use std::path::Path;

use const_format::formatcp;
use serde::Deserialize;

// =============================================================================
// Response Bodies
// =============================================================================

/// Body returned by `GET /api/hello`
pub const HELLO_MESSAGE: &str = "Hello from YorkU Course Planner Backend!";

/// Body returned by `GET /api/health`
pub const HEALTH_MESSAGE: &str = "OK";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Greeting - constant content, safe for shared caches
pub const HTTP_CACHE_HELLO_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_HELLO: &str = formatcp!("public, max-age={}", HTTP_CACHE_HELLO_MAX_AGE);

/// Liveness probes must always reach the process
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Configuration file picked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Path prefix all API routes are nested under
pub const API_PREFIX: &str = "/api";

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "yorku_planner=debug,tower_http=debug";

/// Default bind address (all interfaces)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default time allowed for in-flight requests to finish on shutdown
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    /// Bind address; must be an IP literal
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Seconds to wait for connections to drain after a shutdown signal
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Values are checked later by `validate`, once command-line overrides
    /// have been applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Load configuration, tolerating a missing default file.
    ///
    /// An explicit path must exist. Without one, `DEFAULT_CONFIG_PATH` is used
    /// when present and the built-in defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Replace the bind host and port with command-line values, when given.
    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
    }

    /// Check values that deserialization alone cannot reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be between 1 and 65535".to_string(),
            ));
        }
        self.socket_addr().map(|_| ())
    }

    /// Socket address the HTTP server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.http.host, self.http.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port ({}:{}): {}",
                    self.http.host, self.http.port, e
                ))
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
