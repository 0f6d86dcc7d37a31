use super::definition::AlgorithmSignature;
use crate::error::CatalogError;

/// A trait for custom definition formats that can be converted into Hikisu signatures.
///
/// This is the extension point for feeding the registry from anything other than the
/// stock JSON catalog: a generated constant table, a YAML dump, a reflection response
/// fetched at startup. Implement it on your own structs and hand the result to
/// [`RegistryBuilder::extend`](crate::registry::RegistryBuilder::extend).
///
/// # Example
///
/// ```rust,no_run
/// use hikisu::prelude::*;
/// use hikisu::error::CatalogError;
///
/// // 1. Your own format.
/// struct MyOperation { name: String, inputs: Vec<String> }
/// struct MyTable { operations: Vec<MyOperation> }
///
/// // 2. The translation layer.
/// impl IntoSignatures for MyTable {
///     fn into_signatures(self) -> std::result::Result<Vec<AlgorithmSignature>, CatalogError> {
///         Ok(self
///             .operations
///             .into_iter()
///             .map(|op| {
///                 op.inputs.into_iter().fold(
///                     AlgorithmSignature::new(op.name, "Object"),
///                     |sig, input| sig.with_parameter(ParameterSpec::required(input, "Object")),
///                 )
///             })
///             .collect())
///     }
/// }
/// ```
pub trait IntoSignatures {
    /// Consumes the object and converts it into registry-ready signatures.
    fn into_signatures(self) -> Result<Vec<AlgorithmSignature>, CatalogError>;
}

impl IntoSignatures for Vec<AlgorithmSignature> {
    fn into_signatures(self) -> Result<Vec<AlgorithmSignature>, CatalogError> {
        Ok(self)
    }
}
