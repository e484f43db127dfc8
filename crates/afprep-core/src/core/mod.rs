//! # Core Module
//!
//! Fundamental building blocks for the preprocessing pipelines: molecular
//! data structures, file I/O, sequence assembly, and job-descriptor models.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Structures, models, chains,
//!   residues, and atoms parsed from coordinate files
//! - **File I/O** ([`io`]) - The PDB reader and the trait it implements
//! - **Peptide Assembly** ([`peptide`]) - Contiguous-peptide detection and
//!   one-letter sequence derivation
//! - **Sequence Report** ([`report`]) - The plain-text report format written
//!   by the extraction pipeline
//! - **Job Descriptors** ([`jobs`]) - Serde models for AlphaFold3 job JSON
//!   and the reference template snapshot

pub mod io;
pub mod jobs;
pub mod models;
pub mod peptide;
pub mod report;
