//! HTTP-based OpenAPI document loader

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::parser::{OpenApiParser, parse_document_text};
use super::{OpenApiDocument, OpenApiLoader};
use crate::core::{Error, Result};

/// Loads OpenAPI documents from HTTP/HTTPS URLs
pub struct HttpOpenApiLoader {
    client: Client,
}

impl HttpOpenApiLoader {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| Error::load(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl OpenApiLoader for HttpOpenApiLoader {
    async fn load(&self, source: &str) -> Result<OpenApiDocument> {
        let url =
            Url::parse(source).map_err(|e| Error::load(format!("Invalid URL {source}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::load(format!(
                "HttpOpenApiLoader only handles HTTP(S) URLs, got: {source}"
            )));
        }

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            Error::load(format!("Failed to fetch OpenAPI document from {source}: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::load(format!("HTTP {status} when fetching {source}")));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let content = response
            .text()
            .await
            .map_err(|e| Error::load(format!("Failed to read response body: {e}")))?;
        tracing::debug!("Fetched {} bytes from {source}", content.len());

        let value = parse_document_text(&content, url.path(), content_type.as_deref())?;
        OpenApiParser::new(value).parse()
    }
}
