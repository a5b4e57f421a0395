//! Application configuration loaded from environment variables.

use serde::Deserialize;

use crate::error::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Deployment environment label (development, staging, production).
    #[serde(default = "default_environment")]
    pub environment: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        envy::from_env().map_err(AppError::from)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.is_empty() {
            return Err("ENVIRONMENT must not be empty".to_string());
        }

        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        Ok(())
    }

    /// Check if running in a production environment.
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}
