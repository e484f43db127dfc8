use super::residue::Residue;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub id: char,                                        // Chain identifier (e.g., 'A', 'B')
    pub(crate) residues: Vec<Residue>,                   // Residues in file order
    pub(crate) residue_map: HashMap<(isize, char), usize>, // (seq number, icode) -> index
}

impl Chain {
    pub(crate) fn new(id: char) -> Self {
        Self {
            id,
            residues: Vec::new(),
            residue_map: HashMap::new(),
        }
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn get_residue(&self, id: isize, icode: char) -> Option<&Residue> {
        self.residue_map
            .get(&(id, icode))
            .map(|&idx| &self.residues[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chain_is_empty() {
        let chain = Chain::new('A');
        assert_eq!(chain.id, 'A');
        assert!(chain.residues().is_empty());
        assert!(chain.get_residue(1, ' ').is_none());
    }
}
