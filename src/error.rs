//! Custom error types for kakeibo-form
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::form::ValidationErrors;

/// The main error type for kakeibo-form operations
#[derive(Error, Debug)]
pub enum KakeiboError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// One or more entry fields failed validation
    #[error("Validation failed:\n{0}")]
    Validation(ValidationErrors),

    /// Transport-level submission errors
    #[error("Submission error: {0}")]
    Submission(String),
}

impl KakeiboError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<reqwest::Error> for KakeiboError {
    fn from(err: reqwest::Error) -> Self {
        Self::Submission(err.to_string())
    }
}

impl From<ValidationErrors> for KakeiboError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Result type alias for kakeibo-form operations
pub type KakeiboResult<T> = Result<T, KakeiboError>;
