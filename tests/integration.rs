//! Integration tests for Hikisu
//!
//! End-to-end tests: catalog on disk, settings on disk, snapshot round trip, binding.
//!
mod common;
use ahash::AHashMap;
use common::*;
use hikisu::prelude::*;
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_catalog_file_to_bound_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("algorithms.json");
        fs::write(&path, ALGORITHMS_JSON).unwrap();

        let registry = Catalog::from_file(&path)
            .unwrap()
            .into_registry(SignatureRegistry::builder())
            .unwrap();
        let binder = ArgumentBinder::new();

        let call = binder
            .bind_call(
                &registry,
                "Image.reduceRegion",
                &[handle("img"), handle("reducer")],
                &named(&[("scale", Value::from(30))]),
            )
            .unwrap();

        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(json["algorithm"], "Image.reduceRegion");
        let keys: Vec<_> = json["arguments"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(
            keys,
            vec![
                "image",
                "reducer",
                "geometry",
                "scale",
                "bestEffort",
                "maxPixels",
                "tileScale"
            ]
        );
        assert_eq!(json["arguments"]["scale"], 30);
        assert_eq!(json["arguments"]["maxPixels"], 10000000);
        assert_eq!(json["arguments"]["bestEffort"], false);
    }

    #[test]
    fn test_snapshot_round_trip_through_file() {
        let registry = sample_registry();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.bin");
        let path = path.to_str().unwrap();

        RegistrySnapshot::from_registry(&registry)
            .save(path)
            .expect("Failed to save snapshot");
        let restored = RegistrySnapshot::from_file(path)
            .and_then(RegistrySnapshot::into_registry)
            .expect("Failed to load snapshot");

        assert_eq!(restored.len(), registry.len());
        assert!(registry.list(true).eq(restored.list(true)));
        for signature in &registry {
            assert_eq!(restored.get(&signature.name).unwrap(), signature);
        }
    }

    #[test]
    fn test_snapshot_rejects_garbage_and_duplicates() {
        assert!(RegistrySnapshot::from_bytes(&[0xff, 0x00, 0x13]).is_err());

        let snapshot = RegistrySnapshot::new(vec![array_add(), array_add()]);
        let bytes = snapshot.to_bytes().unwrap();
        let err = RegistrySnapshot::from_bytes(&bytes)
            .unwrap()
            .into_registry()
            .unwrap_err();
        assert!(err.to_string().contains("Array.add"));
    }

    #[test]
    fn test_snapshot_rejects_other_version() {
        let mut snapshot = RegistrySnapshot::from_registry(&fixture_registry());
        snapshot.version = SNAPSHOT_VERSION + 1;
        let bytes = snapshot.to_bytes().unwrap();

        let err = RegistrySnapshot::from_bytes(&bytes).unwrap_err();
        match err {
            SnapshotError::Generic(message) => {
                assert!(message.contains("Unsupported snapshot version"));
                assert!(message.contains(&(SNAPSHOT_VERSION + 1).to_string()));
            }
            other => panic!("Expected Generic error, got {:?}", other),
        }
    }

    #[test]
    fn test_settings_can_silence_deprecation_warnings() {
        let settings = BinderSettings::from_toml_str("warn_on_deprecated = false\n").unwrap();
        let binder = ArgumentBinder::from_settings(&settings);
        assert!(!binder.warns_on_deprecated());
        assert!(ArgumentBinder::new().warns_on_deprecated());

        let registry = sample_registry();
        let call = binder
            .bind_call(&registry, "Image.getDownloadURL", &[handle("img")], &AHashMap::new())
            .unwrap();
        assert_eq!(call.algorithm, "Image.getDownloadURL");
        assert!(registry.get("Image.getDownloadURL").unwrap().is_deprecated());
    }

    #[test]
    fn test_optional_before_required_from_catalog() {
        let registry = sample_registry();
        let binder = ArgumentBinder::new();

        let err = binder
            .bind_call(
                &registry,
                "Image.sample",
                &[handle("img"), handle("geom")],
                &AHashMap::new(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Bind(BindError::PositionalPastOptional { ref parameter, index: 1, .. })
                if parameter == "region"
        ));

        let err = binder
            .bind_call(
                &registry,
                "Image.sample",
                &[handle("img")],
                &named(&[("region", handle("geom"))]),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Bind(BindError::MissingRequiredArgument { ref parameter, .. })
                if parameter == "scale"
        ));

        let call = binder
            .bind_call(
                &registry,
                "Image.sample",
                &[handle("img")],
                &named(&[("scale", Value::from(30))]),
            )
            .unwrap();
        assert_eq!(
            CallFormatter::format_verbose(&call),
            "Image.sample(image={\"ref\": \"img\"}, region=null (default), scale=30, numPixels=null (default))"
        );

        let call = ArgumentBinder::with_policy(PositionalPolicy::Declared)
            .bind_call(
                &registry,
                "Image.sample",
                &[handle("img"), handle("geom"), Value::from(30)],
                &AHashMap::new(),
            )
            .unwrap();
        assert_eq!(call.arguments.source_of("region"), Some(BindingSource::Positional));
    }

    #[test]
    fn test_settings_file_drives_binder_and_builder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hikisu.toml");
        fs::write(
            &path,
            "positional_policy = \"declared\"\nduplicate_policy = \"last-write-wins\"\n",
        )
        .unwrap();

        let settings = BinderSettings::from_file(&path).unwrap();
        assert_eq!(settings.positional_policy, PositionalPolicy::Declared);
        assert_eq!(settings.duplicate_policy, DuplicatePolicy::LastWriteWins);

        let mut builder =
            SignatureRegistry::builder().with_duplicate_policy(settings.duplicate_policy);
        builder
            .extend([kernel_circle(), kernel_circle()])
            .expect("last write wins accepts duplicates");
        let registry = builder.build();

        let binder = ArgumentBinder::from_settings(&settings);
        assert_eq!(binder.policy(), PositionalPolicy::Declared);
        let call = binder
            .bind_call(
                &registry,
                "Kernel.circle",
                &[Value::from(1), Value::from("meters"), Value::from(false)],
                &AHashMap::new(),
            )
            .unwrap();
        assert_eq!(call.arguments.get("normalize"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_all_optional_family_binds_by_name_only() {
        let registry = sample_registry();
        let binder = ArgumentBinder::new();

        let call = binder
            .bind_call(
                &registry,
                "Filter.equals",
                &[],
                &named(&[
                    ("leftField", Value::from("class")),
                    ("rightValue", Value::from(3)),
                ]),
            )
            .unwrap();
        assert_eq!(
            CallFormatter::format_call(&call),
            "Filter.equals(leftField=\"class\", rightValue=3, rightField=null, leftValue=null)"
        );

        let err = binder
            .bind_call(&registry, "Filter.equals", &[Value::from("class")], &AHashMap::new())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Bind(BindError::PositionalPastOptional { index: 0, .. })
        ));
    }

    #[test]
    fn test_deprecated_algorithm_still_binds() {
        let registry = sample_registry();
        let call = ArgumentBinder::new()
            .bind_call(
                &registry,
                "Image.clipToBoundsAndScale",
                &[handle("img")],
                &named(&[("width", Value::from(256))]),
            )
            .unwrap();
        assert_eq!(call.arguments.get("width"), Some(&Value::Number(256.0)));
        assert_eq!(call.arguments.get("height"), Some(&Value::Null));
    }
}
