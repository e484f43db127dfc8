use super::atom::Atom;
use super::chain::Chain;
use super::model::Model;
use super::residue::Residue;
use super::structure::Structure;
use nalgebra::Point3;
use std::collections::HashMap;

pub struct StructureBuilder {
    structure: Structure,

    // --- Builder-specific state for efficient construction ---
    model_serial_map: HashMap<isize, usize>,
    current_model_idx: Option<usize>,
    current_chain_idx: Option<usize>,
    current_residue_idx: Option<usize>,
}

impl StructureBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            structure: Structure {
                id: id.to_string(),
                models: Vec::new(),
            },
            model_serial_map: HashMap::new(),
            current_model_idx: None,
            current_chain_idx: None,
            current_residue_idx: None,
        }
    }

    pub fn start_model(&mut self, serial: isize) -> &mut Self {
        let idx = *self.model_serial_map.entry(serial).or_insert_with(|| {
            let index = self.structure.models.len();
            self.structure.models.push(Model::new(serial));
            index
        });
        self.current_model_idx = Some(idx);
        self.current_chain_idx = None;
        self.current_residue_idx = None;
        self
    }

    pub fn start_chain(&mut self, id: char) -> &mut Self {
        let model_idx = self
            .current_model_idx
            .expect("Must start a model before starting a chain");
        let model = &mut self.structure.models[model_idx];

        let idx = *model.chain_id_map.entry(id).or_insert_with(|| {
            let index = model.chains.len();
            model.chains.push(Chain::new(id));
            index
        });
        self.current_chain_idx = Some(idx);
        self.current_residue_idx = None;
        self
    }

    pub fn start_residue(&mut self, id: isize, icode: char, name: &str, hetero: bool) -> &mut Self {
        let model_idx = self
            .current_model_idx
            .expect("Must start a model before starting a residue");
        let chain_idx = self
            .current_chain_idx
            .expect("Must start a chain before starting a residue");
        let chain = &mut self.structure.models[model_idx].chains[chain_idx];

        let res_idx = *chain.residue_map.entry((id, icode)).or_insert_with(|| {
            let index = chain.residues.len();
            chain.residues.push(Residue::new(id, icode, name, hetero));
            index
        });
        // Mixed ATOM/HETATM records for one residue mark the residue hetero.
        if hetero {
            chain.residues[res_idx].hetero = true;
        }
        self.current_residue_idx = Some(res_idx);
        self
    }

    pub fn add_atom(
        &mut self,
        serial: usize,
        name: &str,
        alt_loc: char,
        position: Point3<f64>,
    ) -> &mut Self {
        let model_idx = self
            .current_model_idx
            .expect("Cannot add atom without a current model");
        let chain_idx = self
            .current_chain_idx
            .expect("Cannot add atom without a current chain");
        let res_idx = self
            .current_residue_idx
            .expect("Cannot add atom without a current residue");

        self.structure.models[model_idx].chains[chain_idx].residues[res_idx]
            .add_atom(Atom::new(serial, name, alt_loc, position));
        self
    }

    pub fn build(self) -> Structure {
        self.structure
    }
}
