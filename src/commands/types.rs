//! The command model.
//!
//! Every document mutation the editor can request is one variant of
//! [`Command`]. Commands are plain data: they name the document and the node
//! they apply to and carry the new value, so a history engine can serialize,
//! replay or invert them without knowing anything about the emitter.

use serde::{Deserialize, Serialize};

use crate::commands::CommandError;
use crate::model::{DocumentId, NodePath, Parameter, ParameterLocation, SimplifiedParameterType};

/// A single document mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Command {
    /// Remove a declared parameter
    #[serde(rename = "DeleteParameterCommand")]
    DeleteParameter {
        document: DocumentId,
        parameter_path: NodePath,
        name: String,
        location: ParameterLocation,
    },

    /// Declare a new parameter on an operation or path item
    #[serde(rename = "NewParamCommand")]
    NewParameter {
        document: DocumentId,
        parent_path: NodePath,
        name: String,
        location: ParameterLocation,
    },

    /// Set one property of a node
    #[serde(rename = "ChangePropertyCommand")]
    ChangeProperty {
        document: DocumentId,
        target: NodePath,
        property: String,
        new_value: serde_json::Value,
    },

    /// Replace a parameter's type
    #[serde(rename = "ChangeParameterTypeCommand")]
    ChangeParameterType {
        document: DocumentId,
        parameter_path: NodePath,
        new_type: SimplifiedParameterType,
    },
}

impl Command {
    /// Build a command deleting `parameter` from its parent
    pub fn delete_parameter(
        document: &DocumentId,
        parameter: &Parameter,
    ) -> Result<Self, CommandError> {
        Ok(Command::DeleteParameter {
            document: document.clone(),
            parameter_path: attached_path(parameter)?,
            name: parameter.name.clone(),
            location: parameter.location,
        })
    }

    /// Build a command declaring parameter `name` at `location` under `parent`
    pub fn new_parameter(
        document: &DocumentId,
        parent: NodePath,
        name: &str,
        location: ParameterLocation,
    ) -> Result<Self, CommandError> {
        if name.is_empty() {
            return Err(CommandError::EmptyName);
        }
        Ok(Command::NewParameter {
            document: document.clone(),
            parent_path: parent,
            name: name.to_string(),
            location,
        })
    }

    /// Build a command setting `property` of the node at `target` to `value`
    pub fn change_property<T: Serialize>(
        document: &DocumentId,
        target: NodePath,
        property: &str,
        value: T,
    ) -> Result<Self, CommandError> {
        let new_value =
            serde_json::to_value(value).map_err(|e| CommandError::Payload(e.to_string()))?;
        Ok(Command::ChangeProperty {
            document: document.clone(),
            target,
            property: property.to_string(),
            new_value,
        })
    }

    /// Build a command setting the description of `parameter`
    pub fn change_parameter_description(
        document: &DocumentId,
        parameter: &Parameter,
        description: &str,
    ) -> Result<Self, CommandError> {
        Self::change_property(document, attached_path(parameter)?, "description", description)
    }

    /// Build a command changing the type of `parameter`
    pub fn change_parameter_type(
        document: &DocumentId,
        parameter: &Parameter,
        new_type: SimplifiedParameterType,
    ) -> Result<Self, CommandError> {
        Ok(Command::ChangeParameterType {
            document: document.clone(),
            parameter_path: attached_path(parameter)?,
            new_type,
        })
    }

    /// Stable name of the command kind, used for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Command::DeleteParameter { .. } => "DeleteParameterCommand",
            Command::NewParameter { .. } => "NewParamCommand",
            Command::ChangeProperty { .. } => "ChangePropertyCommand",
            Command::ChangeParameterType { .. } => "ChangeParameterTypeCommand",
        }
    }

    pub fn document(&self) -> &DocumentId {
        match self {
            Command::DeleteParameter { document, .. }
            | Command::NewParameter { document, .. }
            | Command::ChangeProperty { document, .. }
            | Command::ChangeParameterType { document, .. } => document,
        }
    }

    /// The node the command is addressed to
    pub fn target(&self) -> &NodePath {
        match self {
            Command::DeleteParameter { parameter_path, .. }
            | Command::ChangeParameterType { parameter_path, .. } => parameter_path,
            Command::NewParameter { parent_path, .. } => parent_path,
            Command::ChangeProperty { target, .. } => target,
        }
    }
}

/// Node path of a parameter that must already exist in its document
fn attached_path(parameter: &Parameter) -> Result<NodePath, CommandError> {
    parameter
        .node_path
        .clone()
        .ok_or_else(|| CommandError::Detached {
            name: parameter.name.clone(),
        })
}
