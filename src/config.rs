//! Application configuration loaded from environment variables.
//!
//! The backend origin is resolved once at startup and injected into the
//! API client; nothing reads the environment at request time.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base origin of the OctoFit REST backend (no trailing slash)
    pub api_base_url: String,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            port: 3000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `API_BASE_URL` takes precedence. Otherwise, `CODESPACE_NAME` derives
    /// the Codespaces forwarded-port URL for the backend on port 8000.
    /// Falls back to localhost for local development.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("API_BASE_URL")
            .ok()
            .or_else(|| {
                env::var("CODESPACE_NAME")
                    .ok()
                    .map(|name| format!("https://{}-8000.app.github.dev", name))
            })
            .unwrap_or_else(|| "http://localhost:8000".to_string());

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        }
    }
}
