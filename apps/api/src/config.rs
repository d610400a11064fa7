use anyhow::{Context, Result};
use tokio::net::TcpListener;

const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// Application configuration loaded from environment variables.
/// Fails at startup if the completion service key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    /// The single origin allowed through CORS.
    pub frontend_url: String,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Binds the listening socket. `host` may be an IP literal (v4 or v6) or
    /// a hostname; names are resolved by the bind itself.
    pub async fn listener(&self) -> Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port))
            .await
            .with_context(|| format!("Failed to bind {}:{}", self.host, self.port))
    }

    /// Directive used when `RUST_LOG` is not a valid filter on its own.
    /// Covers this crate and the HTTP trace layer.
    pub fn log_filter(&self) -> String {
        format!(
            "{}={level},tower_http={level}",
            env!("CARGO_PKG_NAME"),
            level = self.rust_log
        )
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
