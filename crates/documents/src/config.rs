// Documents service configuration.
//
// Centralizes environment variable parsing with defaults for local
// development.

use std::net::SocketAddr;

/// Core service configuration.
///
/// Constructed via [`ServiceConfig::from_env`] which reads environment
/// variables and falls back to development defaults.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listen address (host:port).
    pub listen_addr: SocketAddr,
    /// Comma-separated CORS origins. `None` allows any origin.
    pub cors_origins: Option<String>,
    /// Log filter directive (e.g. `info`, `insightflow_documents=debug`).
    pub log_filter: String,
    /// Emit logs as JSON lines instead of the human-readable format.
    pub log_json: bool,
    /// Populate the store with sample documents at startup.
    pub seed_sample_data: bool,
}

impl ServiceConfig {
    /// Parse configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `DOCUMENTS_HOST` | `0.0.0.0` |
    /// | `DOCUMENTS_PORT` | `8080` |
    /// | `DOCUMENTS_CORS_ORIGINS` | *(none: any origin)* |
    /// | `DOCUMENTS_LOG_FILTER` | `info` |
    /// | `DOCUMENTS_LOG_JSON` | `false` |
    /// | `DOCUMENTS_SEED_SAMPLE_DATA` | `true` |
    pub fn from_env() -> Self {
        Self::from_env_fn(|key| std::env::var(key))
    }

    /// Testable constructor that accepts an environment lookup function.
    fn from_env_fn<F>(env: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let host = env("DOCUMENTS_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = env("DOCUMENTS_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(8080);
        let listen_addr = format!("{host}:{port}")
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], port)));

        let cors_origins = env("DOCUMENTS_CORS_ORIGINS").ok().filter(|v| !v.trim().is_empty());

        let log_filter = env("DOCUMENTS_LOG_FILTER").unwrap_or_else(|_| "info".into());
        let log_json = env("DOCUMENTS_LOG_JSON").ok().and_then(|v| parse_flag(&v)).unwrap_or(false);

        let seed_sample_data =
            env("DOCUMENTS_SEED_SAMPLE_DATA").ok().and_then(|v| parse_flag(&v)).unwrap_or(true);

        Self { listen_addr, cors_origins, log_filter, log_json, seed_sample_data }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
