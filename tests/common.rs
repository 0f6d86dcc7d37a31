//! Common test utilities for building signatures, registries and call arguments.
use ahash::AHashMap;
use hikisu::prelude::*;

/// The sample catalog shipped with the repository.
#[allow(dead_code)]
pub const ALGORITHMS_JSON: &str = include_str!("../data/algorithms.json");

/// `Array.add(left, right)`: two required parameters.
#[allow(dead_code)]
pub fn array_add() -> AlgorithmSignature {
    AlgorithmSignature::new("Array.add", "Array")
        .with_description("On an element-wise basis, adds the first value to the second.")
        .with_parameter(ParameterSpec::required("left", "Array"))
        .with_parameter(ParameterSpec::required("right", "Array"))
}

/// `Array.accum(array, axis, reducer=null)`.
#[allow(dead_code)]
pub fn array_accum() -> AlgorithmSignature {
    AlgorithmSignature::new("Array.accum", "Array")
        .with_parameter(ParameterSpec::required("array", "Array"))
        .with_parameter(ParameterSpec::required("axis", "Integer"))
        .with_parameter(ParameterSpec::optional("reducer", "Reducer", Value::Null))
}

/// `Kernel.circle(radius, units="pixels", normalize=true, magnitude=1)`.
#[allow(dead_code)]
pub fn kernel_circle() -> AlgorithmSignature {
    AlgorithmSignature::new("Kernel.circle", "Kernel")
        .with_parameter(ParameterSpec::required("radius", "Float"))
        .with_parameter(ParameterSpec::optional("units", "String", "pixels"))
        .with_parameter(ParameterSpec::optional("normalize", "Boolean", true))
        .with_parameter(ParameterSpec::optional("magnitude", "Float", 1.0))
}

/// An internal-only entry.
#[allow(dead_code)]
pub fn aggregation_container() -> AlgorithmSignature {
    AlgorithmSignature::new("AggregationContainer", "Object")
        .with_description("INTERNAL")
        .with_parameter(ParameterSpec::required("collection", "FeatureCollection"))
        .as_hidden()
}

/// Builds a sealed registry from the hand-written fixtures above.
#[allow(dead_code)]
pub fn fixture_registry() -> SignatureRegistry {
    let mut builder = SignatureRegistry::builder();
    builder
        .extend([
            array_add(),
            array_accum(),
            kernel_circle(),
            aggregation_container(),
        ])
        .expect("fixtures have unique names");
    builder.build()
}

/// Loads the shipped sample catalog.
#[allow(dead_code)]
pub fn sample_registry() -> SignatureRegistry {
    Catalog::from_json_str(ALGORITHMS_JSON)
        .and_then(|catalog| catalog.into_registry(SignatureRegistry::builder()))
        .expect("sample catalog is valid")
}

/// Shorthand for a named-argument map.
#[allow(dead_code)]
pub fn named(pairs: &[(&str, Value)]) -> AHashMap<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// A stand-in for an opaque image/array handle produced by some earlier call.
#[allow(dead_code)]
pub fn handle(id: &str) -> Value {
    Value::Map(vec![("ref".to_string(), Value::from(id))])
}
