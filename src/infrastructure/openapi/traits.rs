//! Port interface for loading OpenAPI documents

use async_trait::async_trait;

use crate::core::Result;
use crate::infrastructure::openapi::OpenApiDocument;

/// Loads OpenAPI documents
#[async_trait]
pub trait OpenApiLoader: Send + Sync {
    /// Load an OpenAPI document from a source
    async fn load(&self, source: &str) -> Result<OpenApiDocument>;
}
