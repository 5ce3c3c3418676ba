//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public address short URLs are built from
//!   (default: `http://localhost:3000`)
//! - `DATA_FILE` - Path of the JSON record file (default: `database.json`)
//! - `CODE_GENERATION_ATTEMPTS` - Short code draws per create before giving up
//!   (default: 5, range: 1-100)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! Binaries load a `.env` file via `dotenvy` before reading the environment.

use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::application::services::DEFAULT_MAX_CODE_ATTEMPTS;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base address, e.g. `https://s.example.com`. A trailing slash is
    /// tolerated and trimmed when short URLs are built.
    pub base_url: String,
    pub data_file: String,
    pub code_generation_attempts: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000".to_string(),
            data_file: "database.json".to_string(),
            code_generation_attempts: DEFAULT_MAX_CODE_ATTEMPTS,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CODE_GENERATION_ATTEMPTS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let base_url = env::var("BASE_URL").unwrap_or(defaults.base_url);
        let data_file = env::var("DATA_FILE").unwrap_or(defaults.data_file);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let code_generation_attempts = match env::var("CODE_GENERATION_ATTEMPTS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("CODE_GENERATION_ATTEMPTS must be a number, got '{v}'"))?,
            Err(_) => defaults.code_generation_attempts,
        };

        Ok(Self {
            listen_addr,
            base_url,
            data_file,
            code_generation_attempts,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an absolute `http`/`https` URL
    /// - `data_file` is empty
    /// - `code_generation_attempts` is outside 1-100
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let base = Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL is not a valid URL: '{}'", self.base_url))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }
        if base.query().is_some() || base.fragment().is_some() {
            anyhow::bail!(
                "BASE_URL must not contain a query or fragment, got '{}'",
                self.base_url
            );
        }

        if self.data_file.trim().is_empty() {
            anyhow::bail!("DATA_FILE must not be empty");
        }

        if !(1..=100).contains(&self.code_generation_attempts) {
            anyhow::bail!(
                "CODE_GENERATION_ATTEMPTS must be between 1 and 100, got {}",
                self.code_generation_attempts
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Data file: {}", self.data_file);
        tracing::info!(
            "  Code generation attempts: {}",
            self.code_generation_attempts
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
