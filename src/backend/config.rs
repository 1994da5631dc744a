#![cfg(feature = "server")]
use anyhow::{bail, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            bail!("API_BASE_URL must start with http:// or https://, got {:?}", base_url);
        }
        Ok(Self {
            base_url: trimmed.to_string(),
            timeout: REQUEST_TIMEOUT,
            connect_timeout: CONNECT_TIMEOUT,
        })
    }

    /// Reads `API_BASE_URL`, falling back to the local development backend.
    pub fn from_env() -> Result<Self> {
        match env::var("API_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }
}
