//! Composite OpenAPI loader that picks a loading strategy per source

use async_trait::async_trait;

use super::{FileOpenApiLoader, HttpOpenApiLoader, OpenApiDocument, OpenApiLoader};
use crate::core::Result;

/// Routes URLs to the HTTP loader and everything else to the file loader
pub struct CompositeOpenApiLoader {
    http: Box<dyn OpenApiLoader>,
    file: Box<dyn OpenApiLoader>,
}

impl CompositeOpenApiLoader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            http: Box::new(HttpOpenApiLoader::new()?),
            file: Box::new(FileOpenApiLoader::new()),
        })
    }
}

#[async_trait]
impl OpenApiLoader for CompositeOpenApiLoader {
    async fn load(&self, source: &str) -> Result<OpenApiDocument> {
        tracing::debug!("CompositeOpenApiLoader: Loading from source: {source}");

        if source.starts_with("http://") || source.starts_with("https://") {
            tracing::debug!("CompositeOpenApiLoader: Using HTTP loader");
            self.http.load(source).await
        } else {
            tracing::debug!("CompositeOpenApiLoader: Using file loader");
            self.file.load(source).await
        }
    }
}
