use std::env;
use std::time::Duration;
use crate::error::{AppError, Result};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub connect_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("SENTIMENT_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = validate_url(api_url)?;

        let connect_timeout = match lookup("SENTIMENT_CONNECT_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| AppError::ConfigError(format!("Invalid connect timeout: {}", e)))?,
            None => DEFAULT_CONNECT_TIMEOUT_SECS,
        };

        Ok(Config {
            api_url,
            connect_timeout: Duration::from_secs(connect_timeout),
        })
    }

    pub fn with_api_url(mut self, api_url: String) -> Result<Self> {
        self.api_url = validate_url(api_url)?;
        Ok(self)
    }
}

fn validate_url(url: String) -> Result<String> {
    let url = url.trim().to_string();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url)
    } else {
        Err(AppError::ConfigError(format!("Invalid API URL: {}", url)))
    }
}
