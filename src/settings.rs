use crate::binder::PositionalPolicy;
use crate::error::SettingsError;
use crate::registry::DuplicatePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for registry construction and binding, loadable from TOML.
///
/// ```toml
/// positional_policy = "declared"
/// duplicate_policy = "reject"
/// include_hidden = false
/// warn_on_deprecated = true
/// ```
///
/// Any key left out falls back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderSettings {
    pub positional_policy: PositionalPolicy,
    pub duplicate_policy: DuplicatePolicy,
    /// Whether listings show hidden algorithms by default.
    pub include_hidden: bool,
    pub warn_on_deprecated: bool,
}

impl Default for BinderSettings {
    fn default() -> Self {
        Self {
            positional_policy: PositionalPolicy::default(),
            duplicate_policy: DuplicatePolicy::default(),
            include_hidden: false,
            warn_on_deprecated: true,
        }
    }
}

impl BinderSettings {
    pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        toml::from_str(contents).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let settings = Self::from_toml_str(&contents)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
