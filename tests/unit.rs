//! Unit tests for core Hikisu types: values, errors and formatting.
mod common;
use common::*;
use hikisu::prelude::*;
use std::collections::HashSet;

#[test]
fn test_value_display() {
    assert_eq!(format!("{}", Value::Number(42.0)), "42");
    assert_eq!(format!("{}", Value::Number(0.5)), "0.5");
    assert_eq!(format!("{}", Value::Bool(true)), "true");
    assert_eq!(format!("{}", Value::Null), "null");
    assert_eq!(format!("{}", Value::from("SUM")), "\"SUM\"");
    assert_eq!(
        format!("{}", Value::List(vec![Value::from(1), Value::Null])),
        "[1, null]"
    );
}

#[test]
fn test_value_hash_and_eq() {
    let mut seen = HashSet::new();
    assert!(seen.insert(Value::Number(1.0)));
    assert!(seen.insert(handle("a")));
    assert!(!seen.insert(handle("a")));
    assert!(!seen.insert(Value::from(1)));
    assert_eq!(seen.len(), 2);

    // Signed zeros are equal, so they must land in the same bucket.
    assert!(seen.insert(Value::Number(0.0)));
    assert!(!seen.insert(Value::Number(-0.0)));
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_value_kind() {
    assert_eq!(Value::Null.kind(), "Null");
    assert_eq!(handle("x").kind(), "Dictionary");
    assert_eq!(Value::from(vec![]).kind(), "List");
}

#[test]
fn test_error_display() {
    let err = BindError::TooManyArguments {
        algorithm: "Array.accum".to_string(),
        expected: 3,
        received: 4,
    };
    assert!(err.to_string().contains("Array.accum"));
    assert!(err.to_string().contains('3'));
    assert!(err.to_string().contains('4'));

    let err = BindError::MissingRequiredArgument {
        algorithm: "Image.select".to_string(),
        parameter: "bandSelectors".to_string(),
    };
    assert!(err.to_string().contains("bandSelectors"));

    let err = RegistryError::DuplicateName {
        name: "Image.add".to_string(),
    };
    assert!(err.to_string().contains("Image.add"));

    let umbrella: Error = RegistryError::UnknownAlgorithm("X.y".to_string()).into();
    assert_eq!(umbrella.to_string(), "Unknown algorithm 'X.y'");
}

#[test]
fn test_format_call() {
    let binder = ArgumentBinder::new();
    let call = binder
        .bind_call(
            &fixture_registry(),
            "Array.accum",
            &[Value::List(vec![Value::from(1), Value::from(2)]), Value::from(0)],
            &ahash::AHashMap::new(),
        )
        .unwrap();

    assert_eq!(
        CallFormatter::format_call(&call),
        "Array.accum(array=[1, 2], axis=0, reducer=null)"
    );
    assert_eq!(
        CallFormatter::format_verbose(&call),
        "Array.accum(array=[1, 2], axis=0, reducer=null (default))"
    );
}

#[test]
fn test_describe_signature() {
    let signature = kernel_circle().with_deprecation("Use Kernel.disk.");
    let description = CallFormatter::describe(&signature);
    let lines: Vec<_> = description.lines().collect();

    assert_eq!(
        lines[0],
        "Kernel.circle(radius, units?, normalize?, magnitude?) -> Kernel"
    );
    assert!(lines.contains(&"  [deprecated] Use Kernel.disk."));
    assert!(lines.contains(&"  - units: String = \"pixels\""));
    assert!(lines.contains(&"  - radius: Float"));
}

#[test]
fn test_signature_helpers() {
    let signature = kernel_circle();
    assert_eq!(signature.position_of("normalize"), Some(2));
    assert_eq!(signature.required_parameters().count(), 1);
    assert_eq!(signature.optional_parameters().count(), 3);
    assert_eq!(array_add().first_optional_index(), None);
}
