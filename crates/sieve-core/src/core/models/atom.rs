use nalgebra::Point3;

/// Represents a single atom record from a structure file.
///
/// Only the fields the filtering pipeline consumes are kept: the atom name
/// (used to locate backbone atoms) and its position in Angstroms.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(name: &str, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            position,
        }
    }
}
