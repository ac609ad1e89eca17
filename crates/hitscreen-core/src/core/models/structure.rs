use nalgebra::Point3;

/// Represents a named molecular structure as an ordered set of 3D atom
/// coordinates.
///
/// A structure is immutable once constructed: the screening engine only ever
/// borrows read-only views of its atoms, so structures can be shared freely
/// across worker threads. Coordinates are unit-agnostic; in the screening
/// domain they are Angstroms.
///
/// Loaders are expected to produce structures with at least one atom. The
/// engine treats an empty structure as a structural fault rather than a user
/// error, so `Structure` itself does not forbid emptiness at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    name: String,
    atoms: Vec<Point3<f64>>,
}

impl Structure {
    /// Creates a new structure from a name and its atom coordinates.
    pub fn new(name: impl Into<String>, atoms: Vec<Point3<f64>>) -> Self {
        Self {
            name: name.into(),
            atoms,
        }
    }

    /// The structure's name, unique within one screening request.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The atom coordinates, in input order.
    pub fn atoms(&self) -> &[Point3<f64>] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}
