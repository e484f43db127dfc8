use super::chain::Chain;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub serial: isize,                              // Model serial number (1 for the implicit model)
    pub(crate) chains: Vec<Chain>,                  // Chains in file order
    pub(crate) chain_id_map: HashMap<char, usize>,  // Chain identifier -> index
}

impl Model {
    pub(crate) fn new(serial: isize) -> Self {
        Self {
            serial,
            chains: Vec::new(),
            chain_id_map: HashMap::new(),
        }
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn get_chain(&self, id: char) -> Option<&Chain> {
        self.chain_id_map.get(&id).map(|&idx| &self.chains[idx])
    }
}
