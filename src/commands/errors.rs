//! Error types for command construction

use thiserror::Error;

/// Reasons a command could not be built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Parameter name cannot be empty")]
    EmptyName,

    #[error("Parameter '{name}' is not attached to a document")]
    Detached { name: String },

    #[error("Invalid property value: {0}")]
    Payload(String),
}
