//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the hikisu crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use hikisu::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let registry = Catalog::from_file("path/to/algorithms.json")?
//!     .into_registry(SignatureRegistry::builder())?;
//!
//! for name in registry.list(false) {
//!     println!("{}", name);
//! }
//! # Ok(())
//! # }
//! ```

// Registry and binding
pub use crate::binder::{
    ArgumentBinder, BindingSource, BoundArgument, BoundArguments, BoundCall, PositionalPolicy,
};
pub use crate::registry::{DuplicatePolicy, RegistryBuilder, SignatureRegistry};

// Signature model
pub use crate::signature::{
    AlgorithmSignature, IntoSignatures, ParameterSpec, RegistrySnapshot, SNAPSHOT_VERSION,
};
pub use crate::value::Value;

// Loading and configuration
pub use crate::catalog::Catalog;
pub use crate::settings::BinderSettings;

// Error types
pub use crate::error::{
    BindError, CatalogError, Error, RegistryError, SettingsError, SnapshotError,
};

// Formatting
pub use crate::format::CallFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
