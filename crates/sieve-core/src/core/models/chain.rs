use super::residue::Residue;

#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub id: String,                    // Chain identifier (e.g., "A", "B")
    pub(crate) residues: Vec<Residue>, // Residues in file order
}

impl Chain {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            residues: Vec::new(),
        }
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    /// The chain's standard-amino-acid residues, in order. This is the
    /// candidate list the chain filter operates on; hetero groups, waters,
    /// and non-amino-acid residues are excluded entirely.
    pub fn standard_residues(&self) -> Vec<&Residue> {
        self.residues
            .iter()
            .filter(|residue| residue.is_standard_amino_acid())
            .collect()
    }
}
