use super::structure::Structure;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("Duplicate structure name in pool: '{0}'")]
    DuplicateName(String),
}

/// An insertion-ordered mapping from structure name to [`Structure`], scoped
/// to a single screening request.
///
/// The pool is built once by a loader, handed to the screening engine as an
/// immutable value, and discarded when the request completes. Iteration
/// follows insertion order, so results are deterministic for a deterministic
/// input order without implying any sort.
#[derive(Debug, Clone, Default)]
pub struct StructurePool {
    /// Primary storage, in insertion order.
    structures: Vec<Structure>,
    /// Lookup map from structure name to its index in `structures`.
    name_map: HashMap<String, usize>,
}

impl StructurePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a structure to the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DuplicateName`] if a structure with the same name
    /// is already present; names are unique keys within one request.
    pub fn insert(&mut self, structure: Structure) -> Result<(), PoolError> {
        if self.name_map.contains_key(structure.name()) {
            return Err(PoolError::DuplicateName(structure.name().to_string()));
        }
        self.name_map
            .insert(structure.name().to_string(), self.structures.len());
        self.structures.push(structure);
        Ok(())
    }

    /// Looks up a structure by name.
    pub fn get(&self, name: &str) -> Option<&Structure> {
        self.name_map.get(name).map(|&i| &self.structures[i])
    }

    /// Whether a structure with this name is present. This is the check the
    /// adaptor performs before any screening begins.
    pub fn contains(&self, name: &str) -> bool {
        self.name_map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// Iterates over the structures in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Structure> {
        self.structures.iter()
    }

    /// Structure names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.structures.iter().map(|s| s.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn structure(name: &str) -> Structure {
        Structure::new(name, vec![Point3::origin()])
    }

    #[test]
    fn insert_and_get_round_trip() {
        let mut pool = StructurePool::new();
        pool.insert(structure("a")).unwrap();
        pool.insert(structure("b")).unwrap();

        assert_eq!(pool.len(), 2);
        assert!(pool.contains("a"));
        assert!(!pool.contains("c"));
        assert_eq!(pool.get("b").unwrap().name(), "b");
        assert!(pool.get("c").is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut pool = StructurePool::new();
        pool.insert(structure("a")).unwrap();
        assert_eq!(
            pool.insert(structure("a")),
            Err(PoolError::DuplicateName("a".to_string()))
        );
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut pool = StructurePool::new();
        for name in ["zeta", "alpha", "mid"] {
            pool.insert(structure(name)).unwrap();
        }
        let names: Vec<_> = pool.names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn empty_pool_reports_empty() {
        let pool = StructurePool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);
        assert_eq!(pool.iter().count(), 0);
    }
}
