use crate::value::Value;
use serde::{Deserialize, Serialize};

/// The canonical description of one remotely invokable algorithm.
/// This is the target structure for any catalog format conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSignature {
    pub name: String,
    pub description: String,
    /// Declared return type. Documentation only; never checked.
    pub return_type: String,
    /// Internal-only algorithms stay invocable but are left out of public listings.
    pub is_hidden: bool,
    /// Replacement guidance when the algorithm is deprecated.
    pub deprecated: Option<String>,
    /// Declaration order defines positional binding order.
    pub parameters: Vec<ParameterSpec>,
}

/// A single formal argument of an algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    /// The remote system's type name (`"Image"`, `"Reducer"`, ...). Opaque to the binder.
    pub type_name: String,
    pub description: Option<String>,
    pub optional: bool,
    /// Bound when the parameter is optional and the caller omits it.
    pub default: Value,
}

impl AlgorithmSignature {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            return_type: return_type.into(),
            is_hidden: false,
            deprecated: None,
            parameters: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn as_hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    pub fn with_deprecation(mut self, guidance: impl Into<String>) -> Self {
        self.deprecated = Some(guidance.into());
        self
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.parameters.iter().position(|p| p.name == name)
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter().filter(|p| !p.optional)
    }

    pub fn optional_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter().filter(|p| p.optional)
    }

    /// Index of the first optional parameter, or `None` if every parameter is required.
    pub fn first_optional_index(&self) -> Option<usize> {
        self.parameters.iter().position(|p| p.optional)
    }
}

impl ParameterSpec {
    pub fn required(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            description: None,
            optional: false,
            default: Value::Null,
        }
    }

    pub fn optional(
        name: impl Into<String>,
        type_name: impl Into<String>,
        default: impl Into<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            description: None,
            optional: true,
            default: default.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
