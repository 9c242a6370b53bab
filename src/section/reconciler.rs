//! Reconciles the parameters a path template references with the ones
//! already declared on its operation or path item.

use std::collections::HashSet;

use crate::model::{
    Parameter, ParameterLocation, SimplifiedParameterType, detect_path_param_names,
};

/// A path parameter as the editor lists it
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayParameter<'a> {
    /// Declared on the model; borrowed as-is
    Declared(&'a Parameter),
    /// Referenced by the template but not declared yet
    Missing(Parameter),
}

impl<'a> DisplayParameter<'a> {
    /// Placeholder for a detected but undeclared path parameter, built from
    /// a transient parameter
    pub fn placeholder(mut param: Parameter, name: &str) -> Self {
        param.name = name.to_string();
        param.location = ParameterLocation::Path;
        param.required = true;
        param.node_path = None;
        DisplayParameter::Missing(param)
    }

    pub fn name(&self) -> &str {
        &self.parameter().name
    }

    pub fn parameter(&self) -> &Parameter {
        match self {
            DisplayParameter::Declared(param) => param,
            DisplayParameter::Missing(param) => param,
        }
    }

    /// The declared parameter, if this is not a placeholder
    pub fn declared(&self) -> Option<&'a Parameter> {
        match self {
            DisplayParameter::Declared(param) => Some(*param),
            DisplayParameter::Missing(_) => None,
        }
    }

    /// Detected in the template but not yet persisted
    pub fn is_missing(&self) -> bool {
        matches!(self, DisplayParameter::Missing(_))
    }

    pub fn simplified_type(&self) -> SimplifiedParameterType {
        SimplifiedParameterType::from_parameter(self.parameter())
    }
}

/// Path parameters to list for `template`.
///
/// Names referenced by the template come first, in order of appearance,
/// followed by declared path parameters the template does not mention.
/// Declared parameters are returned by reference; every other name gets a
/// required placeholder. Parameters at other locations are ignored.
pub fn reconcile_path_parameters<'a, I>(template: &str, declared: I) -> Vec<DisplayParameter<'a>>
where
    I: IntoIterator<Item = &'a Parameter>,
{
    let declared: Vec<&'a Parameter> = declared
        .into_iter()
        .filter(|p| p.location == ParameterLocation::Path)
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let names: Vec<&str> = detect_path_param_names(template)
        .into_iter()
        .chain(declared.iter().map(|p| p.name.as_str()))
        .filter(|name| seen.insert(*name))
        .collect();

    names
        .into_iter()
        .map(|name| match declared.iter().copied().find(|p| p.name == name) {
            Some(param) => DisplayParameter::Declared(param),
            None => DisplayParameter::placeholder(
                Parameter::new(name, ParameterLocation::Path),
                name,
            ),
        })
        .collect()
}
