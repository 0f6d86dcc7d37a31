use crate::error::RegistryError;
use crate::signature::AlgorithmSignature;
use ahash::AHashMap;
use std::slice;

mod builder;

pub use builder::{DuplicatePolicy, RegistryBuilder};

/// An immutable catalog of algorithm signatures, keyed by name.
///
/// A registry is produced once by [`RegistryBuilder::build`] and never mutated
/// afterwards, so it can be shared across threads by reference or behind an `Arc`
/// without any locking.
#[derive(Debug, Clone, Default)]
pub struct SignatureRegistry {
    entries: Vec<AlgorithmSignature>,
    index: AHashMap<String, usize>,
}

impl SignatureRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Looks up a signature by its fully qualified name (e.g. `"Image.select"`).
    pub fn get(&self, name: &str) -> Result<&AlgorithmSignature, RegistryError> {
        self.index
            .get(name)
            .map(|&slot| &self.entries[slot])
            .ok_or_else(|| RegistryError::UnknownAlgorithm(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Names in registration order. Hidden algorithms are skipped unless
    /// `include_hidden` is set. The returned iterator is lazy and can be cloned
    /// to walk the listing again.
    pub fn list(&self, include_hidden: bool) -> Names<'_> {
        Names {
            inner: self.entries.iter(),
            include_hidden,
        }
    }

    /// All signatures in registration order, hidden ones included.
    pub fn iter(&self) -> slice::Iter<'_, AlgorithmSignature> {
        self.entries.iter()
    }

    pub fn deprecated(&self) -> impl Iterator<Item = &AlgorithmSignature> + Clone {
        self.entries.iter().filter(|s| s.is_deprecated())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SignatureRegistry {
    type Item = &'a AlgorithmSignature;
    type IntoIter = slice::Iter<'a, AlgorithmSignature>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Lazy listing of algorithm names produced by [`SignatureRegistry::list`].
#[derive(Debug, Clone)]
pub struct Names<'a> {
    inner: slice::Iter<'a, AlgorithmSignature>,
    include_hidden: bool,
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let include_hidden = self.include_hidden;
        self.inner
            .by_ref()
            .find(|s| include_hidden || !s.is_hidden)
            .map(|s| s.name.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::ParameterSpec;

    #[test]
    fn test_names_iterator_restarts_from_clone() {
        let mut builder = SignatureRegistry::builder();
        builder
            .extend([
                AlgorithmSignature::new("Image.add", "Image"),
                AlgorithmSignature::new("Image.internal", "Image").as_hidden(),
                AlgorithmSignature::new("Image.select", "Image"),
            ])
            .unwrap();
        let registry = builder.build();

        let names = registry.list(false);
        let first: Vec<_> = names.clone().collect();
        let second: Vec<_> = names.collect();
        assert_eq!(first, vec!["Image.add", "Image.select"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_last_write_wins_keeps_listing_position() {
        let mut builder =
            SignatureRegistry::builder().with_duplicate_policy(DuplicatePolicy::LastWriteWins);
        builder
            .register(AlgorithmSignature::new("Kernel.circle", "Kernel"))
            .unwrap();
        builder
            .register(AlgorithmSignature::new("Kernel.square", "Kernel"))
            .unwrap();
        builder
            .register(
                AlgorithmSignature::new("Kernel.circle", "Kernel")
                    .with_parameter(ParameterSpec::required("radius", "Float")),
            )
            .unwrap();
        let registry = builder.build();

        assert_eq!(registry.len(), 2);
        let names: Vec<_> = registry.list(true).collect();
        assert_eq!(names, vec!["Kernel.circle", "Kernel.square"]);
        assert_eq!(registry.get("Kernel.circle").unwrap().parameters.len(), 1);
    }
}
