#![cfg(feature = "server")]
use thiserror::Error;

/// Failures of a single backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or timeout before a response arrived.
    #[error("sending {method} {url}: {message}")]
    Transport {
        method: String,
        url: String,
        message: String,
    },

    #[error("{method} {url} failed with status {status}")]
    Http {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    /// The response arrived but its payload was not what we expected.
    #[error("decoding JSON from {method} {url} failed: {message}")]
    Decode {
        method: String,
        url: String,
        message: String,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
