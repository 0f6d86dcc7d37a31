use super::SignatureRegistry;
use crate::error::RegistryError;
use crate::signature::AlgorithmSignature;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// What to do when a signature name is registered twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Refuse the second registration. Ambiguous dispatch is never silently resolved.
    #[default]
    Reject,
    /// Replace the earlier entry, keeping its original listing position.
    LastWriteWins,
}

/// Collects signatures during the one-time initialization phase.
///
/// Nothing can be registered once [`build`](Self::build) has sealed the registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<AlgorithmSignature>,
    index: AHashMap<String, usize>,
    policy: DuplicatePolicy,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.entries.reserve(capacity);
        self.index.reserve(capacity);
        self
    }

    /// Inserts a signature, validating its name and parameter list first.
    pub fn register(&mut self, signature: AlgorithmSignature) -> Result<(), RegistryError> {
        if signature.name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        check_unique_parameters(&signature)?;

        match self.index.get(&signature.name) {
            Some(&slot) => match self.policy {
                DuplicatePolicy::Reject => Err(RegistryError::DuplicateName {
                    name: signature.name,
                }),
                DuplicatePolicy::LastWriteWins => {
                    log::warn!(
                        "Algorithm '{}' registered twice; replacing the earlier definition",
                        signature.name
                    );
                    self.entries[slot] = signature;
                    Ok(())
                }
            },
            None => {
                log::debug!(
                    "Registered '{}' ({} parameters)",
                    signature.name,
                    signature.parameters.len()
                );
                self.index.insert(signature.name.clone(), self.entries.len());
                self.entries.push(signature);
                Ok(())
            }
        }
    }

    /// Registers every signature in order, stopping at the first failure.
    pub fn extend<I>(&mut self, signatures: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = AlgorithmSignature>,
    {
        signatures
            .into_iter()
            .try_for_each(|signature| self.register(signature))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Seals the registry. It is read-only from here on.
    pub fn build(self) -> SignatureRegistry {
        log::debug!("Sealed registry with {} signatures", self.entries.len());
        SignatureRegistry {
            entries: self.entries,
            index: self.index,
        }
    }
}

fn check_unique_parameters(signature: &AlgorithmSignature) -> Result<(), RegistryError> {
    let mut seen = AHashSet::with_capacity(signature.parameters.len());
    for parameter in &signature.parameters {
        if !seen.insert(parameter.name.as_str()) {
            return Err(RegistryError::DuplicateParameter {
                algorithm: signature.name.clone(),
                parameter: parameter.name.clone(),
            });
        }
    }
    Ok(())
}
