//! # Workflows Module
//!
//! The user-facing batch pipelines. Each workflow is a single-pass,
//! file-at-a-time transformation: one file is fully read, processed, and
//! (for enrichment) written before the next begins. Per-file failures are
//! logged and skipped; only setup failures (missing directories, an invalid
//! reference file) abort a run.

pub mod enrich;
pub mod extract;
pub mod progress;
