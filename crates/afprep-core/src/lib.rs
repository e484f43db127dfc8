//! # afprep Core Library
//!
//! Batch preprocessing utilities for AlphaFold3 input preparation: extraction
//! of per-chain amino-acid sequences from PDB structure files, and enrichment
//! of AlphaFold3 job descriptors with precomputed MSA and template data.
//!
//! ## Architectural Philosophy
//!
//! The library keeps a strict two-layer split:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Structure` and its
//!   model/chain/residue hierarchy), the PDB reader, peptide assembly, the
//!   sequence-report writer, and the serde models for job descriptors.
//!
//! - **[`workflows`]: The Public API.** The user-facing batch pipelines that
//!   tie the core pieces together: [`workflows::extract`] walks a directory of
//!   structure files and writes a sequence report, [`workflows::enrich`]
//!   merges a reference template snapshot into a batch of job files. Both are
//!   single-pass, file-at-a-time, and report progress through
//!   [`workflows::progress::ProgressReporter`].

pub mod core;
pub mod workflows;
