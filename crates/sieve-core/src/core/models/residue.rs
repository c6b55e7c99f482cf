use super::atom::Atom;
use crate::core::utils::identifiers;
use nalgebra::Point3;

#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub seq_num: isize,          // Residue sequence number from the source file
    pub insertion_code: char,    // PDB insertion code (' ' when absent)
    pub name: String,            // Three-letter residue name (e.g., "ALA", "HOH")
    pub hetero: bool,            // True when the residue came from HETATM records
    pub(crate) atoms: Vec<Atom>, // Atoms in file order
}

impl Residue {
    pub fn new(seq_num: isize, insertion_code: char, name: &str, hetero: bool) -> Self {
        Self {
            seq_num,
            insertion_code,
            name: name.to_string(),
            hetero,
            atoms: Vec::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Position of the first atom with the given name, if the residue has one.
    pub fn position_of(&self, atom_name: &str) -> Option<&Point3<f64>> {
        self.atoms
            .iter()
            .find(|atom| atom.name == atom_name)
            .map(|atom| &atom.position)
    }

    /// Whether this residue is a standard amino acid eligible for sequence
    /// extraction. Hetero-group residues never qualify, regardless of name.
    pub fn is_standard_amino_acid(&self) -> bool {
        !self.hetero && identifiers::is_amino_acid_name(&self.name)
    }
}
