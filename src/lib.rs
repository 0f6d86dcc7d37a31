//! # Hikisu - Call-Signature Registry and Argument Binder
//!
//! **Hikisu** validates calls against a catalog of remote algorithm signatures before
//! they are serialized and sent anywhere. A catalog describes hundreds of operations
//! (`Image.select`, `Reducer.sum`, `Kernel.circle`, ...) by name, return type and an
//! ordered list of parameters with optional defaults. Hikisu turns that table into an
//! immutable registry and binds positional and named arguments onto its entries,
//! producing a canonical argument map in parameter-declaration order.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Catalog**: Parse the JSON definition table with [`catalog::Catalog`],
//!     or implement [`IntoSignatures`](signature::IntoSignatures) for your own format.
//! 2.  **Build the Registry**: Register every signature through a
//!     [`RegistryBuilder`](registry::RegistryBuilder), then seal it. Duplicate names
//!     abort the build.
//! 3.  **Bind Calls**: Use an [`ArgumentBinder`](binder::ArgumentBinder) to validate a
//!     call and fill in defaults. The registry is read-only, so one instance serves any
//!     number of threads.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hikisu::prelude::*;
//! use ahash::AHashMap;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let json = r#"[
//!         {"name": "Array.accum", "returns": "Array", "args": [
//!             {"name": "array", "type": "Array"},
//!             {"name": "axis", "type": "Integer"},
//!             {"name": "reducer", "type": "Reducer", "optional": true, "default": null}
//!         ]}
//!     ]"#;
//!
//!     // 1. Parse the catalog and seal it into a registry.
//!     let registry = Catalog::from_json_str(json)?.into_registry(SignatureRegistry::builder())?;
//!
//!     // 2. Bind a call: two positional arguments, the optional reducer by name.
//!     let binder = ArgumentBinder::new();
//!     let mut named = AHashMap::new();
//!     named.insert("reducer".to_string(), Value::from("SUM"));
//!     let call = binder.bind_call(
//!         &registry,
//!         "Array.accum",
//!         &[Value::List(vec![Value::from(1), Value::from(2)]), Value::from(0)],
//!         &named,
//!     )?;
//!
//!     // 3. Hand the canonical map to the serialization layer.
//!     println!("{}", CallFormatter::format_call(&call));
//!     println!("{}", call.arguments.to_json());
//!     Ok(())
//! }
//! ```

pub mod binder;
pub mod catalog;
pub mod error;
pub mod format;
pub mod prelude;
pub mod registry;
pub mod settings;
pub mod signature;
pub mod value;

#[cfg(feature = "python-bindings")]
mod python;
