//! API Configuration Module
//!
//! Configuration is loaded from environment variables with development
//! defaults. CORS defaults to allowing all origins, matching the
//! permissive headers the service has always sent; set
//! `VETBOOK_CORS_ORIGINS` to restrict.

use std::path::PathBuf;

/// API configuration for binding, storage paths, and CORS.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind host for the HTTP listener.
    pub bind_host: String,

    /// Bind port for the HTTP listener.
    pub port: u16,

    /// Root directory of the blob store (playbook records live under
    /// `<data_dir>/playbooks/`).
    pub data_dir: PathBuf,

    /// Directory holding the built single-page bundle.
    pub static_dir: PathBuf,

    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins.
    pub cors_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: 3000,
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("dist"),
            cors_origins: Vec::new(), // Empty = allow all
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `VETBOOK_API_BIND`: Bind host (default: 0.0.0.0)
    /// - `PORT` / `VETBOOK_API_PORT`: Bind port (default: 3000)
    /// - `VETBOOK_DATA_DIR`: Blob store root (default: data)
    /// - `VETBOOK_STATIC_DIR`: SPA bundle directory (default: dist)
    /// - `VETBOOK_CORS_ORIGINS`: Comma-separated origins (empty = allow all)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_host =
            std::env::var("VETBOOK_API_BIND").unwrap_or(defaults.bind_host);

        let port = std::env::var("PORT")
            .ok()
            .or_else(|| std::env::var("VETBOOK_API_PORT").ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.port);

        let data_dir = std::env::var("VETBOOK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let static_dir = std::env::var("VETBOOK_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let cors_origins = std::env::var("VETBOOK_CORS_ORIGINS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            bind_host,
            port,
            data_dir,
            static_dir,
            cors_origins,
        }
    }
}
