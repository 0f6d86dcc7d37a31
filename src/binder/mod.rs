use crate::error::{BindError, Error};
use crate::registry::SignatureRegistry;
use crate::settings::BinderSettings;
use crate::signature::AlgorithmSignature;
use crate::value::Value;
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

mod bound;

pub use bound::{BindingSource, BoundArgument, BoundArguments};

/// Which parameter slots a positional argument may fill.
///
/// Catalogs do not guarantee that required parameters precede optional ones, so
/// positional binding past an optional slot is easy to get wrong silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionalPolicy {
    /// Positional arguments stop at the first optional parameter; everything from
    /// there on must be passed by name.
    #[default]
    RequiredPrefix,
    /// Positional arguments bind by declared index across the whole parameter list.
    Declared,
}

/// A call that passed validation: the algorithm name plus its canonical arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundCall {
    pub algorithm: String,
    pub arguments: BoundArguments,
}

/// Binds positional and named arguments onto an [`AlgorithmSignature`].
///
/// The binder holds no state besides its policy, so a single instance can be shared
/// freely between threads. Binding either succeeds completely or returns the first
/// violation it finds; no partially bound map is ever handed out.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentBinder {
    policy: PositionalPolicy,
    warn_on_deprecated: bool,
}

impl Default for ArgumentBinder {
    fn default() -> Self {
        Self {
            policy: PositionalPolicy::default(),
            warn_on_deprecated: true,
        }
    }
}

impl ArgumentBinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: PositionalPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn from_settings(settings: &BinderSettings) -> Self {
        Self {
            policy: settings.positional_policy,
            warn_on_deprecated: settings.warn_on_deprecated,
        }
    }

    pub fn policy(&self) -> PositionalPolicy {
        self.policy
    }

    pub fn warns_on_deprecated(&self) -> bool {
        self.warn_on_deprecated
    }

    /// Validates a call and produces the canonical argument map.
    ///
    /// # Arguments
    ///
    /// * `signature`: The algorithm being invoked.
    /// * `positional`: Arguments matched to parameters by declaration index.
    /// * `named`: Arguments matched to parameters by name.
    ///
    /// # Returns
    ///
    /// * `Ok(BoundArguments)`: Every parameter in declaration order, carrying either the
    ///   caller's value or the declared default.
    /// * `Err(BindError)`: The first violation found. Arity is checked before
    ///   the positional policy, named arguments are checked in sorted key order,
    ///   and missing arguments are reported in declaration order.
    pub fn bind(
        &self,
        signature: &AlgorithmSignature,
        positional: &[Value],
        named: &AHashMap<String, Value>,
    ) -> Result<BoundArguments, BindError> {
        let params = &signature.parameters;
        require_arity(signature, positional.len())?;
        self.check_positional_policy(signature, positional.len())?;

        let mut slots: Vec<Option<(Value, BindingSource)>> = vec![None; params.len()];
        for (slot, value) in slots.iter_mut().zip(positional) {
            *slot = Some((value.clone(), BindingSource::Positional));
        }

        for (key, value) in named.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
            let index = signature
                .position_of(key)
                .ok_or_else(|| BindError::UnknownParameter {
                    algorithm: signature.name.clone(),
                    parameter: key.clone(),
                })?;
            if slots[index].is_some() {
                return Err(BindError::DuplicateBinding {
                    algorithm: signature.name.clone(),
                    parameter: key.clone(),
                });
            }
            slots[index] = Some((value.clone(), BindingSource::Named));
        }

        let entries = params
            .iter()
            .zip(slots)
            .map(|(param, slot)| match slot {
                Some((value, source)) => Ok(BoundArgument {
                    name: param.name.clone(),
                    value,
                    source,
                }),
                None if param.optional => Ok(BoundArgument {
                    name: param.name.clone(),
                    value: param.default.clone(),
                    source: BindingSource::Default,
                }),
                None => Err(BindError::MissingRequiredArgument {
                    algorithm: signature.name.clone(),
                    parameter: param.name.clone(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if self.warn_on_deprecated {
            if let Some(guidance) = &signature.deprecated {
                log::warn!("'{}' is deprecated. {}", signature.name, guidance);
            }
        }

        Ok(BoundArguments::from(entries))
    }

    /// Looks the algorithm up by name and binds the call against it.
    pub fn bind_call(
        &self,
        registry: &SignatureRegistry,
        name: &str,
        positional: &[Value],
        named: &AHashMap<String, Value>,
    ) -> Result<BoundCall, Error> {
        let signature = registry.get(name)?;
        let arguments = self.bind(signature, positional, named)?;
        Ok(BoundCall {
            algorithm: signature.name.clone(),
            arguments,
        })
    }

    fn check_positional_policy(
        &self,
        signature: &AlgorithmSignature,
        received: usize,
    ) -> Result<(), BindError> {
        if self.policy == PositionalPolicy::Declared {
            return Ok(());
        }
        match signature.first_optional_index() {
            Some(first) if received > first => Err(BindError::PositionalPastOptional {
                algorithm: signature.name.clone(),
                parameter: signature.parameters[first].name.clone(),
                index: first,
            }),
            _ => Ok(()),
        }
    }
}

/// Helper to reject calls with more positional arguments than declared parameters.
fn require_arity(signature: &AlgorithmSignature, received: usize) -> Result<(), BindError> {
    let expected = signature.parameters.len();
    if received > expected {
        Err(BindError::TooManyArguments {
            algorithm: signature.name.clone(),
            expected,
            received,
        })
    } else {
        Ok(())
    }
}
