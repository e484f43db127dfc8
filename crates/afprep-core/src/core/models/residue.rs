use super::atom::Atom;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub id: isize,                         // Residue sequence number from source file
    pub icode: char,                       // Insertion code (' ' when unset)
    pub name: String,                      // Three-letter residue name (e.g., "ALA", "HOH")
    pub hetero: bool,                      // True if any record for this residue was HETATM
    pub(crate) atoms: Vec<Atom>,           // Atoms in file order
    atom_name_map: HashMap<String, usize>, // Map from atom name to its index in `atoms`
}

impl Residue {
    pub(crate) fn new(id: isize, icode: char, name: &str, hetero: bool) -> Self {
        Self {
            id,
            icode,
            name: name.to_string(),
            hetero,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom: Atom) {
        // First occurrence of an atom name wins; alternate locations beyond
        // the first are dropped by the parser before reaching here.
        self.atom_name_map
            .entry(atom.name.clone())
            .or_insert(self.atoms.len());
        self.atoms.push(atom);
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn get_atom_by_name(&self, name: &str) -> Option<&Atom> {
        self.atom_name_map.get(name).map(|&idx| &self.atoms[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn dummy_atom(serial: usize, name: &str) -> Atom {
        Atom::new(serial, name, ' ', Point3::new(0.0, 0.0, 0.0))
    }

    #[test]
    fn new_residue_initializes_fields_correctly() {
        let residue = Residue::new(10, ' ', "GLY", false);
        assert_eq!(residue.id, 10);
        assert_eq!(residue.name, "GLY");
        assert!(!residue.hetero);
        assert!(residue.atoms().is_empty());
        assert!(residue.get_atom_by_name("CA").is_none());
    }

    #[test]
    fn add_atom_adds_atom_and_maps_name() {
        let mut residue = Residue::new(5, ' ', "ALA", false);
        residue.add_atom(dummy_atom(42, "CA"));
        assert_eq!(residue.atoms().len(), 1);
        assert_eq!(residue.get_atom_by_name("CA").map(|a| a.serial), Some(42));
    }

    #[test]
    fn first_atom_with_a_name_wins() {
        let mut residue = Residue::new(5, ' ', "ALA", false);
        residue.add_atom(dummy_atom(1, "CA"));
        residue.add_atom(dummy_atom(2, "CA"));
        assert_eq!(residue.atoms().len(), 2);
        assert_eq!(residue.get_atom_by_name("CA").map(|a| a.serial), Some(1));
    }

    #[test]
    fn get_atom_by_name_returns_none_for_unknown_name() {
        let mut residue = Residue::new(11, ' ', "LEU", false);
        residue.add_atom(dummy_atom(300, "CD1"));
        assert!(residue.get_atom_by_name("CD2").is_none());
    }
}
