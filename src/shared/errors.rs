//! Error handling for the application

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single `group_pair` request.
///
/// `NotFound` is how the API signals that a pair has no pools (it answers
/// with HTTP 500), so callers treat it as an empty result rather than a fault.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("pair not found (status {0})")]
    NotFound(StatusCode),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),

    #[error("invalid pool payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("at least two token addresses are required, got {0}")]
    TooFewTokens(usize),

    #[error("duplicate token address: {0}")]
    DuplicateToken(String),

    #[error("invalid token address {address}: {reason}")]
    InvalidToken { address: String, reason: String },

    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("scan interval must be greater than zero")]
    ZeroInterval,
}
