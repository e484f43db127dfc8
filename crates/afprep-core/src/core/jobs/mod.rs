//! Serde models for AlphaFold3 job descriptor JSON and the reference
//! template snapshot merged into them by the enrichment pipeline.

pub mod descriptor;
pub mod template;

/// Trivial single-sequence pseudo-alignment for a protein sequence.
pub fn single_sequence_msa(sequence: &str) -> String {
    format!(">query\n{}\n", sequence)
}
