//! In-memory OpenAPI document model.
//!
//! Holds only what the parameter editor needs: path items, their operations
//! and the parameters declared on each, with node paths assigned at parse
//! time. Views borrow the document and implement the model capability traits.

use serde::{Deserialize, Serialize};
use std::fmt::Formatter;

use crate::core::Error;
use crate::model::{DocumentId, Node, NodePath, Parameter, ParameterParent, PathTemplate};

/// HTTP methods an OpenAPI path item can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    /// Get all HTTP methods, in the order OpenAPI lists them
    pub fn all() -> &'static [HttpMethod] {
        &[
            HttpMethod::Get,
            HttpMethod::Put,
            HttpMethod::Post,
            HttpMethod::Delete,
            HttpMethod::Options,
            HttpMethod::Head,
            HttpMethod::Patch,
            HttpMethod::Trace,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        HttpMethod::all()
            .iter()
            .copied()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| Error::config(format!("Unknown HTTP method: {s}")))
    }
}

/// Major specification family of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecVersion {
    Swagger2,
    OpenApi3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub method: HttpMethod,
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub parameters: Vec<Parameter>,
    pub node_path: NodePath,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathItem {
    pub path: String,
    pub parameters: Vec<Parameter>,
    pub operations: Vec<Operation>,
    pub node_path: NodePath,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenApiDocument {
    pub id: DocumentId,
    /// Raw `openapi` / `swagger` version string
    pub version: String,
    pub title: Option<String>,
    pub paths: Vec<PathItem>,
}

impl OpenApiDocument {
    pub fn with_id(mut self, id: DocumentId) -> Self {
        self.id = id;
        self
    }

    pub fn spec_version(&self) -> SpecVersion {
        if self.version.starts_with('2') {
            SpecVersion::Swagger2
        } else {
            SpecVersion::OpenApi3
        }
    }

    pub fn path_items(&self) -> impl Iterator<Item = PathItemView<'_>> {
        self.paths.iter().map(|item| PathItemView {
            document: &self.id,
            item,
        })
    }

    /// The path item whose template is exactly `path`
    pub fn path_item(&self, path: &str) -> Option<PathItemView<'_>> {
        self.path_items().find(|view| view.item.path == path)
    }
}

/// A path item borrowed from its document
#[derive(Debug, Clone, Copy)]
pub struct PathItemView<'a> {
    document: &'a DocumentId,
    item: &'a PathItem,
}

impl<'a> PathItemView<'a> {
    pub fn item(&self) -> &'a PathItem {
        self.item
    }

    pub fn operations(self) -> impl Iterator<Item = OperationView<'a>> {
        let document = self.document;
        self.item
            .operations
            .iter()
            .map(move |operation| OperationView {
                document,
                operation,
            })
    }

    pub fn operation(self, method: HttpMethod) -> Option<OperationView<'a>> {
        self.operations().find(|view| view.operation.method == method)
    }
}

impl Node for PathItemView<'_> {
    fn owner_document(&self) -> &DocumentId {
        self.document
    }

    fn node_path(&self) -> NodePath {
        self.item.node_path.clone()
    }
}

impl PathTemplate for PathItemView<'_> {
    fn path(&self) -> &str {
        &self.item.path
    }
}

impl ParameterParent for PathItemView<'_> {
    fn parameters(&self) -> &[Parameter] {
        &self.item.parameters
    }
}

/// An operation borrowed from its document
#[derive(Debug, Clone, Copy)]
pub struct OperationView<'a> {
    document: &'a DocumentId,
    operation: &'a Operation,
}

impl<'a> OperationView<'a> {
    pub fn operation(&self) -> &'a Operation {
        self.operation
    }

    pub fn method(&self) -> HttpMethod {
        self.operation.method
    }
}

impl Node for OperationView<'_> {
    fn owner_document(&self) -> &DocumentId {
        self.document
    }

    fn node_path(&self) -> NodePath {
        self.operation.node_path.clone()
    }
}

impl ParameterParent for OperationView<'_> {
    fn parameters(&self) -> &[Parameter] {
        &self.operation.parameters
    }
}
