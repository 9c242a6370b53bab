//! OpenAPI model domain: parameter types, node addressing, path templates and
//! the capability traits the editing layer is written against.

pub mod errors;
pub mod node_path;
pub mod simplified;
pub mod template;
pub mod traits;
pub mod types;

pub use errors::ModelError;
pub use node_path::{NodePath, NodePathSegment};
pub use simplified::{SimplifiedParameterType, SimplifiedType, TypeKind};
pub use template::{can_have_path_params, detect_path_param_names};
pub use traits::{Node, ParameterParent, PathTemplate};
pub use types::{DocumentId, Parameter, ParameterLocation, Schema};
