//! Error handling for the pathparams library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Command construction failures
//! live in [`CommandError`](crate::commands::CommandError), text parsing
//! failures of model values in [`ModelError`](crate::model::ModelError); both
//! convert into `Error` via `?`.
//!
//! # Examples
//!
//! ```
//! use pathparams::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     // Operations that might fail...
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type for pathparams operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pathparams operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Structural problem in an OpenAPI document
    #[error("OpenAPI error: {0}")]
    OpenApi(String),

    /// Document could not be fetched or read
    #[error("OpenAPI loading error: {0}")]
    Load(String),

    /// Model value could not be parsed
    #[error("Model error: {0}")]
    Model(#[from] crate::model::ModelError),

    /// Command could not be constructed
    #[error("Command error: {0}")]
    Command(#[from] crate::commands::CommandError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new OpenAPI error
    pub fn openapi<S: Into<String>>(msg: S) -> Self {
        Self::OpenApi(msg.into())
    }

    /// Create a new loading error
    pub fn load<S: Into<String>>(msg: S) -> Self {
        Self::Load(msg.into())
    }
}
