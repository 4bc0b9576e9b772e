//! Core error types for the Octant dashboard.
//!
//! Chain read failures are absorbed by the vault service and never reach
//! this type.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("{0} is not implemented yet")]
    NotImplemented(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Unknown action tab '{0}'")]
    UnknownTab(String),

    #[error("Action '{action}' is unavailable: {reason}")]
    ActionUnavailable { action: String, reason: String },
}
