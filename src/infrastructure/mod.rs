//! Infrastructure layer - concrete document model and loading

pub mod openapi;

pub use openapi::*;
