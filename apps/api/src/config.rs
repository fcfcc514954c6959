use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every field has a default so the service starts with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Path to the report HTML template. A missing template is a deployment
    /// error surfaced per-request, not at startup.
    pub template_path: String,
    /// Directory holding the logo images embedded into each report.
    pub assets_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            template_path: std::env::var("TEMPLATE_PATH")
                .unwrap_or_else(|_| "templates/reportTemplate.html".to_string()),
            assets_dir: std::env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()),
        })
    }
}
