use super::definition::AlgorithmSignature;
use crate::error::SnapshotError;
use crate::registry::SignatureRegistry;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// Current on-disk layout version. Bumped whenever `AlgorithmSignature` changes shape.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A pre-validated, binary copy of a registry's signatures in registration order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegistrySnapshot {
    pub version: u32,
    pub signatures: Vec<AlgorithmSignature>,
}

impl RegistrySnapshot {
    pub fn new(signatures: Vec<AlgorithmSignature>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            signatures,
        }
    }

    pub fn from_registry(registry: &SignatureRegistry) -> Self {
        Self::new(registry.iter().cloned().collect())
    }

    /// Rebuilds a sealed registry. Entries go through the builder again, so a
    /// tampered snapshot cannot smuggle in duplicate names.
    pub fn into_registry(self) -> Result<SignatureRegistry, SnapshotError> {
        let mut builder = SignatureRegistry::builder();
        for signature in self.signatures {
            builder.register(signature)?;
        }
        Ok(builder.build())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        encode_to_vec(self, standard())
            .map_err(|e| SnapshotError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Saves the snapshot to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            SnapshotError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            SnapshotError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        log::debug!(
            "Saved snapshot of {} signatures to '{}'",
            self.signatures.len(),
            path
        );
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let mut file = fs::File::open(path).map_err(|e| {
            SnapshotError::Generic(format!("Could not open file '{}': {}", path, e))
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            SnapshotError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| SnapshotError::Generic(format!("Deserialization failed: {}", e)))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::Generic(format!(
                "Unsupported snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }
        Ok(snapshot)
    }
}
