//! Command domain: the tagged command model and the dispatch port

pub mod dispatcher;
pub mod errors;
pub mod types;

pub use dispatcher::*;
pub use errors::*;
pub use types::Command;
