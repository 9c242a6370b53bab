//! Simplified type descriptors used when editing a parameter's type.
//!
//! The editor never exposes full JSON Schema for parameters; the user picks a
//! primitive kind, optionally a format, enum values or an array item type.

use serde::{Deserialize, Serialize};
use std::fmt::Formatter;

use crate::model::{ModelError, Parameter, Schema};

/// Primitive kinds selectable for a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::String => "string",
            TypeKind::Integer => "integer",
            TypeKind::Number => "number",
            TypeKind::Boolean => "boolean",
            TypeKind::Array => "array",
            TypeKind::Object => "object",
        }
    }

    fn from_schema_type(value: &str) -> Option<Self> {
        match value {
            "string" => Some(TypeKind::String),
            "integer" => Some(TypeKind::Integer),
            "number" => Some(TypeKind::Number),
            "boolean" => Some(TypeKind::Boolean),
            "array" => Some(TypeKind::Array),
            "object" => Some(TypeKind::Object),
            _ => None,
        }
    }
}

impl std::str::FromStr for TypeKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_schema_type(&s.to_lowercase())
            .ok_or_else(|| ModelError::UnknownType(s.to_string()))
    }
}

/// Type of a value: kind, format, enum values and array item type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedType {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TypeKind>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Item type when `kind` is `array`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub of: Option<Box<SimplifiedType>>,
    /// Format, e.g. `int64` or `date-time`
    #[serde(rename = "as", default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl SimplifiedType {
    pub fn of_kind(kind: TypeKind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn with_format<S: Into<String>>(mut self, format: S) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn array_of(item: SimplifiedType) -> Self {
        Self {
            kind: Some(TypeKind::Array),
            of: Some(Box::new(item)),
            ..Default::default()
        }
    }

    pub fn from_schema(schema: &Schema) -> Self {
        let enum_values = schema.enum_values.as_ref().map(|values| {
            values
                .iter()
                .map(|v| match v {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        });

        Self {
            kind: schema
                .schema_type
                .as_deref()
                .and_then(TypeKind::from_schema_type),
            enum_values,
            of: schema
                .items
                .as_deref()
                .map(|items| Box::new(Self::from_schema(items))),
            format: schema.format.clone(),
        }
    }

    pub fn is_array(&self) -> bool {
        self.kind == Some(TypeKind::Array)
    }

    pub fn is_enum(&self) -> bool {
        self.enum_values.as_ref().is_some_and(|v| !v.is_empty())
    }
}

impl std::fmt::Display for SimplifiedType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            None => f.write_str("unknown")?,
            Some(TypeKind::Array) => {
                f.write_str("array of ")?;
                match &self.of {
                    Some(item) => write!(f, "{item}")?,
                    None => f.write_str("unknown")?,
                }
            }
            Some(kind) => f.write_str(kind.as_str())?,
        }
        if let Some(format) = &self.format {
            write!(f, " ({format})")?;
        }
        if self.is_enum() {
            f.write_str(" enum")?;
        }
        Ok(())
    }
}

/// A [`SimplifiedType`] plus the parameter's `required` flag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedParameterType {
    #[serde(flatten)]
    pub simple_type: SimplifiedType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl SimplifiedParameterType {
    pub fn new(simple_type: SimplifiedType, required: Option<bool>) -> Self {
        Self {
            simple_type,
            required,
        }
    }

    /// Current type of `param`, as the editor would present it
    pub fn from_parameter(param: &Parameter) -> Self {
        let simple_type = param
            .schema
            .as_ref()
            .map(SimplifiedType::from_schema)
            .unwrap_or_default();
        Self {
            simple_type,
            required: Some(param.required),
        }
    }
}
