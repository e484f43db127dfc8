//! Data structures for molecular structures parsed from coordinate files.
//!
//! The hierarchy is ordered the way coordinate files are: a [`structure::Structure`]
//! holds models, a [`model::Model`] holds chains, a [`chain::Chain`] holds
//! residues, and a [`residue::Residue`] holds atoms. Construction goes through
//! [`builder::StructureBuilder`], which de-duplicates models, chains, and
//! residues as records stream in.

pub mod atom;
pub mod builder;
pub mod chain;
pub mod model;
pub mod residue;
pub mod structure;
