//! Path parameter editing for OpenAPI documents.
//!
//! The crate reconciles the parameters a path template references with the
//! ones declared on its operation or path item, and turns user edits into
//! [`Command`](commands::Command)s for an injected
//! [`CommandDispatcher`](commands::CommandDispatcher).
//!
//! ```
//! use std::sync::Arc;
//! use pathparams::commands::CommandQueue;
//! use pathparams::infrastructure::{HttpMethod, OpenApiParser};
//! use pathparams::section::PathParamsSection;
//!
//! let doc = OpenApiParser::new(serde_json::json!({
//!     "openapi": "3.0.3",
//!     "paths": { "/users/{id}": { "get": {} } }
//! }))
//! .parse()
//! .unwrap();
//!
//! let item = doc.path_item("/users/{id}").unwrap();
//! let op = item.operation(HttpMethod::Get).unwrap();
//! let queue = Arc::new(CommandQueue::new());
//! let section = PathParamsSection::new(&op, &item, queue.clone());
//!
//! let params = section.path_parameters();
//! assert_eq!(params[0].name(), "id");
//! assert!(params[0].is_missing());
//!
//! section.create_path_param("id").unwrap();
//! assert_eq!(queue.len(), 1);
//! ```
#![deny(unsafe_code)]

pub mod commands;
pub mod core;
pub mod infrastructure;
pub mod model;
pub mod section;

pub use crate::core::{Error, Result};
