//! Provides input functionality for molecular coordinate file formats.
//!
//! The extraction pipeline only ever reads structures, so unlike a full
//! modeling package there is no write half: the [`traits::StructureFile`]
//! trait covers parsing from a reader or a path, and [`pdb`] implements it
//! for the PDB fixed-column format.

pub mod pdb;
pub mod traits;
