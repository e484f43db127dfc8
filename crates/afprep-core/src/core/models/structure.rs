use super::model::Model;

/// A complete molecular structure parsed from a coordinate file.
///
/// Holds the ordered list of models; every lower level of the hierarchy is
/// reached through accessor slices, never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    pub id: String, // Identifier, conventionally the source filename
    pub(crate) models: Vec<Model>,
}

impl Structure {
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Total number of atoms across all models.
    pub fn atom_count(&self) -> usize {
        self.models
            .iter()
            .flat_map(|m| m.chains())
            .flat_map(|c| c.residues())
            .map(|r| r.atoms().len())
            .sum()
    }
}
