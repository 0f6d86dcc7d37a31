use crate::value::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::slice;

/// How a parameter slot received its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingSource {
    Positional,
    Named,
    Default,
}

impl fmt::Display for BindingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingSource::Positional => write!(f, "positional"),
            BindingSource::Named => write!(f, "named"),
            BindingSource::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundArgument {
    pub name: String,
    pub value: Value,
    pub source: BindingSource,
}

/// The canonical, fully keyed argument map for one call.
///
/// Entries follow parameter-declaration order, so serializing the same call twice
/// always produces byte-identical output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundArguments {
    entries: Vec<BoundArgument>,
}

impl BoundArguments {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.find(name).map(|a| &a.value)
    }

    pub fn source_of(&self, name: &str) -> Option<BindingSource> {
        self.find(name).map(|a| a.source)
    }

    pub fn iter(&self) -> slice::Iter<'_, BoundArgument> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ordered JSON object, ready for the serialization layer.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|a| (a.name.clone(), a.value.to_json()))
                .collect(),
        )
    }

    /// Drops the binding provenance, keeping `(name, value)` pairs in order.
    pub fn into_values(self) -> Vec<(String, Value)> {
        self.entries
            .into_iter()
            .map(|a| (a.name, a.value))
            .collect()
    }

    fn find(&self, name: &str) -> Option<&BoundArgument> {
        self.entries.iter().find(|a| a.name == name)
    }
}

impl From<Vec<BoundArgument>> for BoundArguments {
    fn from(entries: Vec<BoundArgument>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a BoundArguments {
    type Item = &'a BoundArgument;
    type IntoIter = slice::Iter<'a, BoundArgument>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for BoundArguments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for argument in &self.entries {
            map.serialize_entry(&argument.name, &argument.value.to_json())?;
        }
        map.end()
    }
}
