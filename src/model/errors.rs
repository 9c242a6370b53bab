//! Error types for the model layer

use thiserror::Error;

/// Text that does not parse into a model value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid node path: {0}")]
    InvalidNodePath(String),

    #[error("Invalid parameter location: {0}")]
    InvalidLocation(String),

    #[error("Unknown type: {0}")]
    UnknownType(String),
}
