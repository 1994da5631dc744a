#![cfg(feature = "server")]

pub mod client;
pub mod cloudopt;
pub mod config;
pub mod error;
#[cfg(test)]
pub mod testing;

pub use client::{ApiClient, GLOBAL_API};
pub use config::ApiConfig;
pub use error::ApiError;

pub use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Builds the shared client from the environment and installs it.
pub fn init_api() -> anyhow::Result<&'static ApiClient> {
    use anyhow::Context;

    let config = ApiConfig::from_env().context("reading API configuration")?;
    let client = ApiClient::new(&config).context("building HTTP client")?;
    Ok(GLOBAL_API.get_or_init(|| client))
}
