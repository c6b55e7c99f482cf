use super::chain::Chain;

/// One coordinate model of a structure.
///
/// Crystal structures carry a single model; NMR ensembles carry several.
/// Every model's chains are candidates for extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub(crate) chains: Vec<Chain>,
}

impl Model {
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }
}

/// A complete parsed structure entry from one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    /// Identifier of the entry, derived from the source file name.
    pub id: String,
    /// Experimental resolution in Angstroms, when the file declares one.
    /// Absent for resolution-free methods (NMR) and files without the record.
    pub resolution: Option<f64>,
    pub(crate) models: Vec<Model>,
}

impl Structure {
    pub fn models(&self) -> &[Model] {
        &self.models
    }
}
