//! The path parameters section of the editor.
//!
//! [`PathParamsSection`] is bound to the operation or path item that owns the
//! parameters (`parent`) and to the path item supplying the template
//! (`path`). It lists path parameters through the reconciler and turns user
//! edits into commands for the injected dispatcher. It never mutates the
//! model itself.

pub mod reconciler;

pub use reconciler::{DisplayParameter, reconcile_path_parameters};

use std::sync::Arc;

use tracing::debug;

use crate::commands::{Command, CommandDispatcher, CommandError};
use crate::model::{
    Node, Parameter, ParameterLocation, ParameterParent, PathTemplate, SimplifiedParameterType,
    can_have_path_params,
};

pub struct PathParamsSection<'a, P: ?Sized, T: ?Sized> {
    parent: &'a P,
    path: &'a T,
    dispatcher: Arc<dyn CommandDispatcher>,
}

impl<'a, P, T> PathParamsSection<'a, P, T>
where
    P: ParameterParent + ?Sized,
    T: PathTemplate + ?Sized,
{
    pub fn new(parent: &'a P, path: &'a T, dispatcher: Arc<dyn CommandDispatcher>) -> Self {
        Self {
            parent,
            path,
            dispatcher,
        }
    }

    /// Point the section at a new context, keeping the dispatcher
    pub fn bind(&mut self, parent: &'a P, path: &'a T) {
        self.parent = parent;
        self.path = path;
    }

    pub fn can_have_path_params(&self) -> bool {
        can_have_path_params(self.path.path())
    }

    /// Whether the parameters being edited are the path item's own
    pub fn is_path_item(&self) -> bool {
        self.parent.owner_document() == self.path.owner_document()
            && self.parent.node_path() == self.path.node_path()
    }

    /// Detected and declared path parameters, detected names first
    pub fn path_parameters(&self) -> Vec<DisplayParameter<'a>> {
        let parent: &'a P = self.parent;
        reconcile_path_parameters(
            self.path.path(),
            parent.get_parameters(ParameterLocation::Path),
        )
    }

    /// The declared path parameter `name`, or a placeholder for it
    pub fn path_param(&self, name: &str) -> DisplayParameter<'a> {
        let parent: &'a P = self.parent;
        match parent.parameter(ParameterLocation::Path, name) {
            Some(param) => DisplayParameter::Declared(param),
            None => DisplayParameter::placeholder(parent.create_parameter(), name),
        }
    }

    pub fn delete_param(&self, parameter: &Parameter) -> Result<(), CommandError> {
        let command = Command::delete_parameter(self.parent.owner_document(), parameter)?;
        self.emit(command);
        Ok(())
    }

    pub fn create_path_param(&self, name: &str) -> Result<(), CommandError> {
        let command = Command::new_parameter(
            self.parent.owner_document(),
            self.parent.node_path(),
            name,
            ParameterLocation::Path,
        )?;
        self.emit(command);
        Ok(())
    }

    pub fn change_param_description(
        &self,
        parameter: &Parameter,
        description: &str,
    ) -> Result<(), CommandError> {
        let command = Command::change_parameter_description(
            self.parent.owner_document(),
            parameter,
            description,
        )?;
        self.emit(command);
        Ok(())
    }

    pub fn change_param_type(
        &self,
        parameter: &Parameter,
        new_type: SimplifiedParameterType,
    ) -> Result<(), CommandError> {
        let command =
            Command::change_parameter_type(self.parent.owner_document(), parameter, new_type)?;
        self.emit(command);
        Ok(())
    }

    fn emit(&self, command: Command) {
        debug!(
            "Emitting {} on {} ({})",
            command.kind(),
            command.target(),
            command.document()
        );
        self.dispatcher.emit(command);
    }
}
