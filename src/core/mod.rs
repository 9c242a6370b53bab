//! Cross-cutting pieces shared by every layer: errors and configuration.

pub mod config;
pub mod error;

pub use config::StudioConfig;
pub use error::{Error, Result};
