//! Error types for cinelex
//!
//! This module defines the error types used throughout the library.
//! Blank review text is not an error: the analyzer reports it as "no
//! analysis" instead, so there is no empty-input variant here.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CinelexError>;

/// Main error type for cinelex
#[derive(Error, Debug, Clone)]
pub enum CinelexError {
    /// The polarity scorer failed on a span of text.
    /// Propagated as-is; the pipeline performs no retry or fallback.
    #[error("Scorer error: {message}")]
    Scorer { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl CinelexError {
    /// Create a scorer error
    pub fn scorer(message: impl Into<String>) -> Self {
        Self::Scorer {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CinelexError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
