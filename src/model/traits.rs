//! Capability interfaces over an OpenAPI document model.
//!
//! The reconciler and the command emitter only ever see a document through
//! these traits, so any model (the bundled in-memory one, or a host
//! application's own) can be plugged in.

use crate::model::{DocumentId, NodePath, Parameter, ParameterLocation};

/// Anything addressable inside a document
pub trait Node {
    /// Document that owns this node
    fn owner_document(&self) -> &DocumentId;

    /// Location of this node inside its document
    fn node_path(&self) -> NodePath;
}

/// A path item, which supplies the path template
pub trait PathTemplate: Node {
    /// The path template, e.g. `/users/{id}`
    fn path(&self) -> &str;
}

/// An operation or path item that owns parameters
pub trait ParameterParent: Node {
    /// Every parameter declared directly on this node
    fn parameters(&self) -> &[Parameter];

    /// Declared parameters at `location`, in declaration order
    fn get_parameters(&self, location: ParameterLocation) -> Vec<&Parameter> {
        self.parameters()
            .iter()
            .filter(|p| p.location == location)
            .collect()
    }

    /// The declared parameter named `name` at `location`
    fn parameter(&self, location: ParameterLocation, name: &str) -> Option<&Parameter> {
        self.parameters()
            .iter()
            .find(|p| p.location == location && p.name == name)
    }

    /// A transient parameter, not attached to this node
    fn create_parameter(&self) -> Parameter {
        Parameter::new(String::new(), ParameterLocation::Query)
    }
}
