//! Runtime configuration for the `pathparams` binary.
//!
//! Values come from an optional TOML file and are then overridden by
//! command-line flags.

use std::path::Path;

use serde::Deserialize;

use crate::core::error::Result;
use crate::infrastructure::openapi::HttpMethod;
use crate::model::DocumentId;

/// Settings shared by every CLI subcommand
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioConfig {
    /// Identifier stamped on emitted commands; a random one is used when absent
    pub document_id: Option<String>,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Operation to bind when `--method` is not given; `None` binds the path item
    pub default_method: Option<HttpMethod>,
}

impl StudioConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Apply command-line overrides on top of file values
    pub fn merge_overrides(
        mut self,
        document_id: Option<&str>,
        pretty: bool,
        method: Option<HttpMethod>,
    ) -> Self {
        if let Some(id) = document_id {
            self.document_id = Some(id.to_string());
        }
        self.pretty |= pretty;
        if method.is_some() {
            self.default_method = method;
        }
        self
    }

    /// Configured document id, if any
    pub fn document_id(&self) -> Option<DocumentId> {
        self.document_id.as_deref().map(DocumentId::new)
    }
}
