use serde::Deserialize;

/// One algorithm entry as the generated definition table spells it
#[derive(Debug, Deserialize, Clone)]
pub struct RawAlgorithm {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "returnType")]
    pub returns: Option<String>,
    #[serde(default, alias = "isHidden")]
    pub hidden: bool,
    #[serde(default, alias = "isDeprecated")]
    pub deprecated: Option<RawDeprecation>,
    #[serde(default, alias = "arguments")]
    pub args: Vec<RawArgument>,
}

/// Deprecation marker: either a bare flag or replacement guidance
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawDeprecation {
    Flag(bool),
    Guidance(String),
}

/// One formal argument of a raw entry
#[derive(Debug, Deserialize, Clone)]
pub struct RawArgument {
    pub name: String,
    #[serde(default, rename = "type", alias = "typeName")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
}

/// Top-level document: a bare array, or an object wrapping it
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawDocument {
    List(Vec<RawAlgorithm>),
    Wrapped { algorithms: Vec<RawAlgorithm> },
}
