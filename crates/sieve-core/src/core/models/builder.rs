use super::atom::Atom;
use super::chain::Chain;
use super::residue::Residue;
use super::structure::{Model, Structure};
use nalgebra::Point3;
use std::collections::HashMap;

/// Assembles a [`Structure`] in source-file order.
///
/// The builder keeps cursor state for the model/chain/residue currently being
/// filled, so a reader can stream records straight into it. Chains are
/// idempotent within a model and residues within a chain: restarting an
/// existing one moves the cursor back instead of creating a duplicate.
pub struct StructureBuilder {
    id: String,
    resolution: Option<f64>,
    models: Vec<Model>,

    // --- Builder-specific state for streaming construction ---
    chain_index_map: HashMap<String, usize>,
    residue_index_map: HashMap<(isize, char), usize>,
    current_model_idx: Option<usize>,
    current_chain_idx: Option<usize>,
    current_residue_idx: Option<usize>,
}

impl StructureBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            resolution: None,
            models: Vec::new(),
            chain_index_map: HashMap::new(),
            residue_index_map: HashMap::new(),
            current_model_idx: None,
            current_chain_idx: None,
            current_residue_idx: None,
        }
    }

    pub fn set_resolution(&mut self, resolution: f64) -> &mut Self {
        self.resolution = Some(resolution);
        self
    }

    pub fn start_model(&mut self) -> &mut Self {
        self.models.push(Model::default());
        self.current_model_idx = Some(self.models.len() - 1);
        self.current_chain_idx = None;
        self.current_residue_idx = None;
        self.chain_index_map.clear();
        self.residue_index_map.clear();
        self
    }

    pub fn end_model(&mut self) -> &mut Self {
        self.current_model_idx = None;
        self.current_chain_idx = None;
        self.current_residue_idx = None;
        self.chain_index_map.clear();
        self.residue_index_map.clear();
        self
    }

    /// Starts (or re-enters) a chain in the current model. Files that carry
    /// coordinates without an enclosing MODEL record get an implicit one.
    pub fn start_chain(&mut self, id: &str) -> &mut Self {
        if self.current_model_idx.is_none() {
            self.start_model();
        }
        let model_idx = self.current_model_idx.expect("model cursor just set");
        let model = &mut self.models[model_idx];

        let idx = *self.chain_index_map.entry(id.to_string()).or_insert_with(|| {
            let index = model.chains.len();
            model.chains.push(Chain::new(id));
            index
        });
        if self.current_chain_idx != Some(idx) {
            self.residue_index_map = self.models[model_idx].chains[idx]
                .residues
                .iter()
                .enumerate()
                .map(|(i, r)| ((r.seq_num, r.insertion_code), i))
                .collect();
        }
        self.current_chain_idx = Some(idx);
        self.current_residue_idx = None;
        self
    }

    pub fn start_residue(
        &mut self,
        seq_num: isize,
        insertion_code: char,
        name: &str,
        hetero: bool,
    ) -> &mut Self {
        let model_idx = self
            .current_model_idx
            .expect("Must start a chain before starting a residue");
        let chain_idx = self
            .current_chain_idx
            .expect("Must start a chain before starting a residue");
        let chain = &mut self.models[model_idx].chains[chain_idx];

        let res_idx = *self
            .residue_index_map
            .entry((seq_num, insertion_code))
            .or_insert_with(|| {
                let index = chain.residues.len();
                chain
                    .residues
                    .push(Residue::new(seq_num, insertion_code, name, hetero));
                index
            });
        self.current_residue_idx = Some(res_idx);
        self
    }

    pub fn add_atom(&mut self, name: &str, position: Point3<f64>) -> &mut Self {
        let model_idx = self
            .current_model_idx
            .expect("Cannot add an atom without a current residue");
        let chain_idx = self
            .current_chain_idx
            .expect("Cannot add an atom without a current residue");
        let res_idx = self
            .current_residue_idx
            .expect("Cannot add an atom without a current residue");

        self.models[model_idx].chains[chain_idx].residues[res_idx]
            .add_atom(Atom::new(name, position));
        self
    }

    pub fn build(self) -> Structure {
        Structure {
            id: self.id,
            resolution: self.resolution,
            models: self.models,
        }
    }
}
