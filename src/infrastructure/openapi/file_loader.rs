//! File-based OpenAPI document loader
//!
//! This loader handles only file I/O. The actual parsing is done by the OpenApiParser.

use async_trait::async_trait;
use tokio::fs;

use super::parser::{OpenApiParser, parse_document_text};
use super::{OpenApiDocument, OpenApiLoader};
use crate::core::Result;

/// Loads OpenAPI documents from local files
#[derive(Debug, Default)]
pub struct FileOpenApiLoader;

impl FileOpenApiLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OpenApiLoader for FileOpenApiLoader {
    async fn load(&self, source: &str) -> Result<OpenApiDocument> {
        let content = fs::read_to_string(source).await?;
        tracing::debug!("Read {} bytes from {source}", content.len());

        let value = parse_document_text(&content, source, None)?;
        OpenApiParser::new(value).parse()
    }
}
