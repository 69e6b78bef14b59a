//! Configuration loading and constants.
//!
//! The service runs without any configuration file: every setting has a default
//! matching the documented behavior (listen on `:8000`, count hits in the
//! `counters.hits` collection, five second request deadline). An optional TOML
//! file can override any of them. `AppConfig` is the root configuration struct.
//!
//! Database credentials are never read from the config file; they come from the
//! environment on every request (see [`crate::settings`]).

use serde::Deserialize;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;
use std::time::Duration;

// =============================================================================
// HTTP
// =============================================================================

/// Default listen address, Go style (all interfaces, port 8000)
pub const DEFAULT_LISTEN_ADDRESS: &str = ":8000";

/// Host used when the listen address omits one (`:8000`)
pub const UNSPECIFIED_HOST: &str = "0.0.0.0";

/// Every hit mutates the counter, so responses must never be served from a cache
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

/// Seconds to wait for in-flight requests after SIGTERM/SIGINT
pub const SHUTDOWN_GRACE_PERIOD_SECS: u64 = 30;

// =============================================================================
// Database
// =============================================================================

/// Database holding the counter document (created implicitly)
pub const DEFAULT_DATABASE_NAME: &str = "counters";

/// Collection holding the counter document (created implicitly)
pub const DEFAULT_COLLECTION_NAME: &str = "hits";

/// `_id` of the counter document
pub const DEFAULT_COUNTER_ID: &str = "counter";

/// Deadline for the whole per-request database interaction
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither -log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "docdb_example=info,tower_http=info";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Counter namespace and request deadline
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    /// Listen address, e.g. `:8000`, `127.0.0.1:8000` or `[::1]:8000`
    #[serde(default = "HttpServerConfig::default_listen")]
    pub listen: String,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            listen: Self::default_listen(),
        }
    }
}

impl HttpServerConfig {
    fn default_listen() -> String {
        DEFAULT_LISTEN_ADDRESS.to_string()
    }

    /// Resolve the configured listen address to a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_listen_addr(&self.listen)
    }
}

/// Where the counter document lives and how long a hit may take
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "DatabaseConfig::default_name")]
    pub name: String,
    #[serde(default = "DatabaseConfig::default_collection")]
    pub collection: String,
    #[serde(default = "DatabaseConfig::default_counter_id")]
    pub counter_id: String,
    /// Deadline in seconds covering secret lookup, connect, ping and increment
    #[serde(default = "DatabaseConfig::default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            collection: Self::default_collection(),
            counter_id: Self::default_counter_id(),
            timeout_seconds: Self::default_timeout(),
        }
    }
}

impl DatabaseConfig {
    fn default_name() -> String {
        DEFAULT_DATABASE_NAME.to_string()
    }

    fn default_collection() -> String {
        DEFAULT_COLLECTION_NAME.to_string()
    }

    fn default_counter_id() -> String {
        DEFAULT_COUNTER_ID.to_string()
    }

    fn default_timeout() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    /// Per-request deadline as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
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
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let db = &self.database;
        for (key, value) in [
            ("database.name", &db.name),
            ("database.collection", &db.collection),
            ("database.counter_id", &db.counter_id),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{} must not be empty", key)));
            }
        }

        if db.timeout_seconds == 0 {
            return Err(ConfigError::Validation(
                "database.timeout_seconds must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parse a listen address, accepting the Go `:port` shorthand for all interfaces.
pub fn parse_listen_addr(listen: &str) -> Result<SocketAddr, ConfigError> {
    let candidate = if listen.starts_with(':') {
        format!("{}{}", UNSPECIFIED_HOST, listen)
    } else {
        listen.to_string()
    };

    candidate
        .to_socket_addrs()
        .map_err(|e| ConfigError::Validation(format!("invalid listen address {:?}: {}", listen, e)))?
        .next()
        .ok_or_else(|| {
            ConfigError::Validation(format!("listen address {:?} resolved to nothing", listen))
        })
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_documented_behavior() {
        let config = AppConfig::default();
        assert_eq!(config.http.listen, ":8000");
        assert_eq!(config.database.name, "counters");
        assert_eq!(config.database.collection, "hits");
        assert_eq!(config.database.counter_id, "counter");
        assert_eq!(config.database.timeout(), Duration::from_secs(5));
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = write_config(
            r#"
            [database]
            collection = "visits"

            [logging]
            format = "json"
            "#,
        );

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.database.collection, "visits");
        assert_eq!(config.database.name, "counters");
        assert_eq!(config.database.timeout_seconds, 5);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.http.listen, ":8000");
    }

    #[test]
    fn test_load_empty_file() {
        let file = write_config("");
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.listen, DEFAULT_LISTEN_ADDRESS);
    }

    #[test]
    fn test_load_rejects_zero_timeout() {
        let file = write_config("[database]\ntimeout_seconds = 0\n");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn test_load_rejects_empty_counter_id() {
        let file = write_config("[database]\ncounter_id = \"  \"\n");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("database.counter_id"));
    }

    #[test]
    fn test_load_rejects_unknown_log_format() {
        let file = write_config("[logging]\nformat = \"xml\"\n");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load("/nonexistent/docdb-example.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_listen_addr_port_only() {
        let addr = parse_listen_addr(":8000").unwrap();
        assert_eq!(addr.ip(), IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    fn test_parse_listen_addr_with_host() {
        let addr = parse_listen_addr("127.0.0.1:9000").unwrap();
        assert_eq!(addr.ip(), IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(addr.port(), 9000);
    }

    #[test]
    fn test_parse_listen_addr_ipv6() {
        let addr = parse_listen_addr("[::1]:8080").unwrap();
        assert_eq!(addr.ip(), IpAddr::V6(Ipv6Addr::LOCALHOST));
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_parse_listen_addr_rejects_missing_port() {
        assert!(parse_listen_addr("127.0.0.1").is_err());
        assert!(parse_listen_addr(":notaport").is_err());
    }
}
