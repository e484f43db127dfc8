//! Contiguous-peptide detection and one-letter sequence derivation.
//!
//! Sequence text is never stored on the models; it is derived per chain by
//! [`PeptideBuilder`], which walks a chain's standard amino-acid residues and
//! groups them into peptide fragments wherever consecutive residues are
//! joined by a plausible C–N bond. Hetero residues, non-amino-acid residues,
//! and residues missing backbone atoms all break a fragment.

pub mod codes;

use crate::core::models::chain::Chain;
use crate::core::models::residue::Residue;

/// Default maximum C(i)–N(i+1) distance, in Angstroms, for two residues to be
/// considered peptide-bonded.
pub const DEFAULT_BOND_RADIUS: f64 = 1.8;

/// A contiguous run of peptide-bonded standard amino-acid residues.
#[derive(Debug, Clone, PartialEq)]
pub struct Peptide {
    codes: Vec<char>,
}

impl Peptide {
    /// One-letter sequence of this fragment.
    pub fn sequence(&self) -> String {
        self.codes.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Assembles peptide fragments from chains.
#[derive(Debug, Clone)]
pub struct PeptideBuilder {
    bond_radius: f64,
}

impl Default for PeptideBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PeptideBuilder {
    pub fn new() -> Self {
        Self {
            bond_radius: DEFAULT_BOND_RADIUS,
        }
    }

    /// Overrides the maximum C–N bond distance.
    pub fn with_bond_radius(bond_radius: f64) -> Self {
        Self { bond_radius }
    }

    /// One-letter code for residues eligible for peptide assembly; hetero
    /// and non-standard residues are excluded.
    fn peptide_code(residue: &Residue) -> Option<char> {
        if residue.hetero {
            return None;
        }
        codes::one_letter_code(&residue.name)
    }

    /// True when `a` and `b` are close enough for a peptide bond, judged by
    /// the distance between `a`'s carbonyl carbon and `b`'s backbone nitrogen.
    fn is_bonded(&self, a: &Residue, b: &Residue) -> bool {
        match (a.get_atom_by_name("C"), b.get_atom_by_name("N")) {
            (Some(c), Some(n)) => c.distance_to(n) <= self.bond_radius,
            _ => false,
        }
    }

    /// Builds the peptide fragments of a chain, in residue order.
    pub fn build_peptides(&self, chain: &Chain) -> Vec<Peptide> {
        let mut peptides = Vec::new();
        let mut current: Vec<char> = Vec::new();
        let mut prev: Option<&Residue> = None;

        for residue in chain.residues() {
            let Some(code) = Self::peptide_code(residue) else {
                if !current.is_empty() {
                    peptides.push(Peptide {
                        codes: std::mem::take(&mut current),
                    });
                }
                prev = None;
                continue;
            };

            if let Some(prev_res) = prev {
                if !self.is_bonded(prev_res, residue) && !current.is_empty() {
                    peptides.push(Peptide {
                        codes: std::mem::take(&mut current),
                    });
                }
            }
            current.push(code);
            prev = Some(residue);
        }
        if !current.is_empty() {
            peptides.push(Peptide { codes: current });
        }
        peptides
    }

    /// Concatenated one-letter sequence of every fragment in the chain.
    ///
    /// Empty when the chain has no standard amino-acid residues.
    pub fn chain_sequence(&self, chain: &Chain) -> String {
        self.build_peptides(chain)
            .iter()
            .map(|p| p.sequence())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::builder::StructureBuilder;
    use crate::core::models::structure::Structure;
    use nalgebra::Point3;

    // Residues spaced so that C(i) and N(i+1) sit `gap` apart along x.
    fn linear_chain(residues: &[(&str, bool)], gap: f64) -> Structure {
        let mut builder = StructureBuilder::new("synthetic");
        builder.start_model(1);
        builder.start_chain('A');
        let mut serial = 1;
        let mut x = 0.0;
        for (i, (name, hetero)) in residues.iter().enumerate() {
            builder.start_residue(i as isize + 1, ' ', name, *hetero);
            builder.add_atom(serial, "N", ' ', Point3::new(x, 0.0, 0.0));
            builder.add_atom(serial + 1, "CA", ' ', Point3::new(x + 1.0, 0.0, 0.0));
            builder.add_atom(serial + 2, "C", ' ', Point3::new(x + 2.0, 0.0, 0.0));
            serial += 3;
            x += 2.0 + gap;
        }
        builder.build()
    }

    fn chain_of(structure: &Structure) -> &crate::core::models::chain::Chain {
        &structure.models()[0].chains()[0]
    }

    #[test]
    fn bonded_residues_form_one_peptide() {
        let structure = linear_chain(&[("GLY", false), ("ALA", false), ("SER", false)], 1.3);
        let peptides = PeptideBuilder::new().build_peptides(chain_of(&structure));
        assert_eq!(peptides.len(), 1);
        assert_eq!(peptides[0].sequence(), "GAS");
        assert_eq!(peptides[0].len(), 3);
        assert!(!peptides[0].is_empty());
    }

    #[test]
    fn a_gap_beyond_the_bond_radius_splits_fragments() {
        let structure = linear_chain(&[("GLY", false), ("ALA", false)], 5.0);
        let builder = PeptideBuilder::new();
        let peptides = builder.build_peptides(chain_of(&structure));
        assert_eq!(peptides.len(), 2);
        assert_eq!(builder.chain_sequence(chain_of(&structure)), "GA");
    }

    #[test]
    fn hetero_and_nonstandard_residues_break_and_are_omitted() {
        let structure = linear_chain(
            &[("GLY", false), ("HOH", true), ("MSE", false), ("ALA", false)],
            1.3,
        );
        let builder = PeptideBuilder::new();
        let peptides = builder.build_peptides(chain_of(&structure));
        assert_eq!(peptides.len(), 2);
        assert_eq!(builder.chain_sequence(chain_of(&structure)), "GA");
    }

    #[test]
    fn missing_backbone_atoms_break_the_fragment() {
        let mut builder = StructureBuilder::new("x");
        builder.start_model(1);
        builder.start_chain('A');
        builder.start_residue(1, ' ', "GLY", false);
        builder.add_atom(1, "N", ' ', Point3::new(0.0, 0.0, 0.0));
        // No carbonyl carbon on residue 1.
        builder.start_residue(2, ' ', "ALA", false);
        builder.add_atom(2, "N", ' ', Point3::new(1.0, 0.0, 0.0));
        builder.add_atom(3, "C", ' ', Point3::new(2.0, 0.0, 0.0));
        let structure = builder.build();

        let peptides = PeptideBuilder::new().build_peptides(chain_of(&structure));
        assert_eq!(peptides.len(), 2);
        assert_eq!(peptides[0].len(), 1);
        assert_eq!(peptides[1].len(), 1);
    }

    #[test]
    fn chain_without_amino_acids_yields_empty_sequence() {
        let structure = linear_chain(&[("HOH", true), ("HOH", true)], 1.3);
        assert_eq!(PeptideBuilder::new().chain_sequence(chain_of(&structure)), "");
    }

    #[test]
    fn custom_bond_radius_is_honored() {
        let structure = linear_chain(&[("GLY", false), ("ALA", false)], 2.5);
        assert_eq!(
            PeptideBuilder::new().build_peptides(chain_of(&structure)).len(),
            2
        );
        assert_eq!(
            PeptideBuilder::with_bond_radius(3.0)
                .build_peptides(chain_of(&structure))
                .len(),
            1
        );
    }
}
