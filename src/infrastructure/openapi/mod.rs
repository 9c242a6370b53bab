//! OpenAPI document model, parser and loaders

pub mod composite_loader;
pub mod document;
pub mod file_loader;
pub mod http_loader;
pub mod parser;
pub mod traits;

pub use composite_loader::CompositeOpenApiLoader;
pub use document::{
    HttpMethod, OpenApiDocument, Operation, OperationView, PathItem, PathItemView, SpecVersion,
};
pub use file_loader::FileOpenApiLoader;
pub use http_loader::HttpOpenApiLoader;
pub use parser::OpenApiParser;
pub use traits::OpenApiLoader;
