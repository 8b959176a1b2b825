//! Structure registry for managing registered structures.

use std::collections::HashMap;

use crate::error::{LinefieldError, Result};
use crate::structure::Structure;

/// Ordered registry of all structures in a scene.
///
/// Registration order is draw order: the structure registered `n`-th becomes
/// Plotly trace `n`. Names are unique across all structure types so that
/// animation groups can refer to structures by name alone.
#[derive(Default)]
pub struct Registry {
    structures: Vec<Box<dyn Structure>>,
    /// Map from structure name -> trace index
    indices: HashMap<String, usize>,
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a structure and returns its trace index.
    ///
    /// Returns an error if a structure with the same name already exists.
    pub fn register(&mut self, structure: Box<dyn Structure>) -> Result<usize> {
        let name = structure.name().to_string();
        if self.indices.contains_key(&name) {
            return Err(LinefieldError::StructureExists(name));
        }

        let index = self.structures.len();
        log::debug!(
            "registered {} '{}' as trace {}",
            structure.type_name(),
            name,
            index
        );
        self.indices.insert(name, index);
        self.structures.push(structure);
        Ok(index)
    }

    /// Gets a reference to a structure by name.
    pub fn get(&self, name: &str) -> Option<&dyn Structure> {
        self.index_of(name).map(|i| self.structures[i].as_ref())
    }

    /// Gets a structure by name, downcast to its concrete type.
    pub fn get_as<T: Structure>(&self, name: &str) -> Option<&T> {
        self.get(name).and_then(|s| s.as_any().downcast_ref::<T>())
    }

    /// Returns the trace index of the named structure.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Checks if a structure with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Returns an iterator over all structures in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Structure> {
        self.structures.iter().map(AsRef::as_ref)
    }

    /// Returns the structure names in draw order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(Structure::name).collect()
    }

    /// Returns the total number of registered structures.
    pub fn len(&self) -> usize {
        self.structures.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// Returns all structures of a given type, in draw order.
    pub fn get_all_of_type<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = &'a dyn Structure> + 'a {
        self.iter().filter(move |s| s.type_name() == type_name)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use glam::DVec3;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    /// Minimal structure used to exercise the registry and scene.
    pub(crate) struct Marker {
        pub name: String,
        pub position: DVec3,
        pub opacity: f64,
    }

    impl Marker {
        pub(crate) fn boxed(name: &str, position: DVec3) -> Box<dyn Structure> {
            Box::new(Self {
                name: name.to_string(),
                position,
                opacity: 1.0,
            })
        }
    }

    impl Structure for Marker {
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn type_name(&self) -> &'static str {
            "Marker"
        }

        fn opacity(&self) -> f64 {
            self.opacity
        }

        fn set_opacity(&mut self, opacity: f64) {
            self.opacity = opacity;
        }

        fn to_trace(&self) -> Value {
            json!({ "type": "scatter3d", "name": self.name })
        }
    }

    #[test]
    fn test_register_assigns_draw_order() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.register(Marker::boxed("a", DVec3::ZERO)).unwrap(), 0);
        assert_eq!(registry.register(Marker::boxed("b", DVec3::X)).unwrap(), 1);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.index_of("b"), Some(1));
        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(registry.iter().next().unwrap().name(), "a");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = Registry::new();
        registry.register(Marker::boxed("a", DVec3::ZERO)).unwrap();
        let err = registry.register(Marker::boxed("a", DVec3::X)).unwrap_err();
        assert!(matches!(err, LinefieldError::StructureExists(name) if name == "a"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_as_downcasts() {
        let mut registry = Registry::new();
        registry.register(Marker::boxed("a", DVec3::Y)).unwrap();
        let marker = registry.get_as::<Marker>("a").unwrap();
        assert_eq!(marker.position, DVec3::Y);
        assert!(registry.get("missing").is_none());
        assert!(!registry.contains("missing"));
        assert_eq!(registry.get_all_of_type("Marker").count(), 1);
    }

    proptest! {
        #[test]
        fn prop_index_matches_registration_order(
            names in prop::collection::hash_set("[a-z]{1,8}", 1..16),
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let mut registry = Registry::new();
            for (i, name) in names.iter().enumerate() {
                prop_assert_eq!(registry.register(Marker::boxed(name, DVec3::ZERO)).unwrap(), i);
            }
            for (i, name) in names.iter().enumerate() {
                prop_assert_eq!(registry.index_of(name), Some(i));
            }
            prop_assert_eq!(registry.names(), names.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
