//! Loading signature catalogs from their JSON definition source.
//!
//! The definition source is the generated algorithm table: a JSON array where every
//! entry names an algorithm, its return type, its visibility flags and its ordered
//! argument list. Both the snake-case keys of the table (`returns`, `args`,
//! `hidden`) and the camel-case keys of reflection responses (`returnType`,
//! `arguments`, `isHidden`) are accepted.

use crate::error::CatalogError;
use crate::registry::{RegistryBuilder, SignatureRegistry};
use crate::signature::{AlgorithmSignature, IntoSignatures, ParameterSpec};
use crate::value::Value;
use std::fs;
use std::path::Path;

mod model;

pub use model::{RawAlgorithm, RawArgument, RawDeprecation};
use model::RawDocument;

/// A parsed but not yet validated catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub entries: Vec<RawAlgorithm>,
}

impl Catalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: RawDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::Json(e.to_string()))?;
        let entries = match document {
            RawDocument::List(entries) => entries,
            RawDocument::Wrapped { algorithms } => algorithms,
        };
        log::debug!("Parsed catalog with {} entries", entries.len());
        Ok(Self { entries })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts every entry and registers it, sealing the registry on success.
    /// Any duplicate name aborts the whole load.
    pub fn into_registry(
        self,
        mut builder: RegistryBuilder,
    ) -> Result<SignatureRegistry, CatalogError> {
        let signatures = self.into_signatures()?;
        builder.extend(signatures)?;
        Ok(builder.build())
    }
}

impl IntoSignatures for Catalog {
    fn into_signatures(self) -> Result<Vec<AlgorithmSignature>, CatalogError> {
        self.entries
            .into_iter()
            .enumerate()
            .map(|(index, raw)| convert_entry(index, raw))
            .collect()
    }
}

fn convert_entry(index: usize, raw: RawAlgorithm) -> Result<AlgorithmSignature, CatalogError> {
    if raw.name.trim().is_empty() {
        return Err(CatalogError::InvalidEntry {
            index,
            message: "algorithm name is empty".to_string(),
        });
    }

    let parameters = raw
        .args
        .into_iter()
        .enumerate()
        .map(|(position, arg)| convert_argument(index, &raw.name, position, arg))
        .collect::<Result<Vec<_>, _>>()?;

    let deprecated = match raw.deprecated {
        Some(RawDeprecation::Guidance(guidance)) => Some(guidance),
        Some(RawDeprecation::Flag(true)) => Some(String::new()),
        Some(RawDeprecation::Flag(false)) | None => None,
    };

    Ok(AlgorithmSignature {
        name: raw.name,
        description: raw.description.unwrap_or_default(),
        return_type: raw.returns.unwrap_or_default(),
        is_hidden: raw.hidden,
        deprecated,
        parameters,
    })
}

fn convert_argument(
    index: usize,
    algorithm: &str,
    position: usize,
    arg: RawArgument,
) -> Result<ParameterSpec, CatalogError> {
    if arg.name.trim().is_empty() {
        return Err(CatalogError::InvalidEntry {
            index,
            message: format!("argument #{} of '{}' has an empty name", position, algorithm),
        });
    }

    let default = match (arg.optional, arg.default) {
        (true, Some(json)) => Value::from(json),
        (true, None) => Value::Null,
        (false, Some(_)) => {
            log::debug!(
                "Ignoring default of required argument '{}' on '{}'",
                arg.name,
                algorithm
            );
            Value::Null
        }
        (false, None) => Value::Null,
    };

    Ok(ParameterSpec {
        name: arg.name,
        type_name: arg.type_name.unwrap_or_default(),
        description: arg.description,
        optional: arg.optional,
        default,
    })
}
