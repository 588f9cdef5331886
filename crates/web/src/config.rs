use std::time::Duration;

use holonet_directory::DEFAULT_BASE_URL;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Budget for one directory call in milliseconds (default: `10000`).
    /// Must stay below the request timeout.
    pub directory_timeout_ms: u64,
    /// Root of the character directory API.
    pub swapi_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `3000`                   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    /// | `DIRECTORY_TIMEOUT_MS` | `10000`                  |
    /// | `SWAPI_BASE_URL`       | `https://swapi.dev/api`  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let directory_timeout_ms: u64 = std::env::var("DIRECTORY_TIMEOUT_MS")
            .unwrap_or_else(|_| "10000".into())
            .parse()
            .expect("DIRECTORY_TIMEOUT_MS must be a valid u64");
        assert!(
            directory_timeout_ms < request_timeout_secs.saturating_mul(1000),
            "DIRECTORY_TIMEOUT_MS must be below REQUEST_TIMEOUT_SECS"
        );

        let swapi_base_url =
            std::env::var("SWAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        Self {
            host,
            port,
            request_timeout_secs,
            directory_timeout_ms,
            swapi_base_url,
        }
    }

    /// Deadline for a single directory call.
    pub fn directory_timeout(&self) -> Duration {
        Duration::from_millis(self.directory_timeout_ms)
    }
}
