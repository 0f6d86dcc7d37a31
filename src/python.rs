use crate::binder::ArgumentBinder;
use crate::catalog::Catalog;
use crate::error::{Error, RegistryError};
use crate::format::CallFormatter;
use crate::registry::SignatureRegistry;
use crate::value::Value;
use ahash::AHashMap;
use pyo3::exceptions::{PyKeyError, PyTypeError, PyValueError};
use pyo3::prelude::*;

fn to_py_err(error: Error) -> PyErr {
    match error {
        Error::Registry(RegistryError::UnknownAlgorithm(name)) => PyKeyError::new_err(name),
        Error::Bind(e) => PyTypeError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// An immutable registry of algorithm signatures.
///
/// The catalog is parsed and validated once, at construction time. The `bind`
/// method can then be called repeatedly, from any thread, to validate calls and
/// fill in declared defaults.
#[pyclass(name = "Registry", frozen)]
struct RegistryPy {
    registry: SignatureRegistry,
    binder: ArgumentBinder,
}

#[pymethods]
impl RegistryPy {
    /// Parses a JSON catalog and seals it into a registry.
    ///
    /// Args:
    ///     catalog_json (str): The JSON definition table, an array of algorithm
    ///         entries with `name`, `returns` and `args`.
    ///
    /// Raises:
    ///     ValueError: If the JSON is malformed or two entries share a name.
    #[new]
    fn new(catalog_json: &str) -> PyResult<Self> {
        let registry = Catalog::from_json_str(catalog_json)
            .and_then(|catalog| catalog.into_registry(SignatureRegistry::builder()))
            .map_err(|e| to_py_err(e.into()))?;
        Ok(RegistryPy {
            registry,
            binder: ArgumentBinder::new(),
        })
    }

    /// Lists algorithm names in registration order.
    ///
    /// Args:
    ///     include_hidden (bool): Also list internal-only algorithms.
    #[pyo3(signature = (include_hidden = false))]
    fn names(&self, include_hidden: bool) -> Vec<String> {
        self.registry
            .list(include_hidden)
            .map(str::to_string)
            .collect()
    }

    /// Returns a human-readable summary of one signature.
    ///
    /// Raises:
    ///     KeyError: If the algorithm is unknown.
    fn describe(&self, name: &str) -> PyResult<String> {
        let signature = self
            .registry
            .get(name)
            .map_err(|e| to_py_err(e.into()))?;
        Ok(CallFormatter::describe(signature))
    }

    /// Binds a call and returns the canonical arguments as a JSON object string.
    ///
    /// Args:
    ///     name (str): The algorithm name.
    ///     args_json (str): JSON array of positional arguments.
    ///     kwargs_json (str): JSON object of named arguments.
    ///
    /// Returns:
    ///     str: A JSON object mapping every parameter, in declaration order, to
    ///         its bound value or declared default.
    ///
    /// Raises:
    ///     KeyError: If the algorithm is unknown.
    ///     TypeError: If the arguments do not fit the signature.
    ///     ValueError: If either JSON string is malformed.
    #[pyo3(signature = (name, args_json = "[]", kwargs_json = "{}"))]
    fn bind(&self, name: &str, args_json: &str, kwargs_json: &str) -> PyResult<String> {
        let positional: Vec<serde_json::Value> = serde_json::from_str(args_json)
            .map_err(|e| PyValueError::new_err(format!("Invalid args JSON: {}", e)))?;
        let named: AHashMap<String, serde_json::Value> = serde_json::from_str(kwargs_json)
            .map_err(|e| PyValueError::new_err(format!("Invalid kwargs JSON: {}", e)))?;

        let positional: Vec<Value> = positional.into_iter().map(Value::from).collect();
        let named: AHashMap<String, Value> = named
            .into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect();

        let call = self
            .binder
            .bind_call(&self.registry, name, &positional, &named)
            .map_err(to_py_err)?;
        Ok(call.arguments.to_json().to_string())
    }

    fn __len__(&self) -> usize {
        self.registry.len()
    }

    fn __contains__(&self, name: &str) -> bool {
        self.registry.contains(name)
    }
}

/// Call-signature validation for remote algorithm catalogs.
///
/// This module provides Python bindings to the Hikisu Rust library.
#[pymodule]
fn hikisu(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<RegistryPy>()?;
    Ok(())
}
