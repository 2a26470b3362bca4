// src/error.rs

//! Unified error handling for the recipe book.

use std::fmt;

use thiserror::Error;

/// Result type alias for recipe book operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// The recipe API reported that the account quota is used up (HTTP 402)
    #[error("Recipe API quota exceeded")]
    QuotaExceeded,

    /// Any other failed request: network, non-2xx status or malformed body
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// A favorites/ratings mutation was attempted without a session
    #[error("Login required to {action}")]
    Unauthenticated { action: String },

    /// Star rating outside 1..=5
    #[error("Invalid rating {0}: expected a value from 1 to 5")]
    InvalidRating(u8),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Path that matches none of the known routes
    #[error("Unknown route '{0}'")]
    Route(String),
}

impl AppError {
    /// Create a fetch failure from any displayable cause.
    pub fn fetch_failed(cause: impl fmt::Display) -> Self {
        Self::FetchFailed(cause.to_string())
    }

    /// Create an authentication error for the given action.
    pub fn unauthenticated(action: impl Into<String>) -> Self {
        Self::Unauthenticated {
            action: action.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this is the quota-exhaustion outcome.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded)
    }
}
