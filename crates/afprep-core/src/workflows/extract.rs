use super::progress::{Progress, ProgressReporter};
use crate::core::io::pdb::PdbFile;
use crate::core::io::traits::StructureFile;
use crate::core::peptide::PeptideBuilder;
use crate::core::report::SequenceReport;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Name of the report written into the output directory.
pub const REPORT_FILE_NAME: &str = "sequences.txt";

/// Extension of the structure files enumerated in the input directory.
pub const STRUCTURE_EXTENSION: &str = "pdb";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Input directory '{}' not found", path.display())]
    InputDirNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractSummary {
    pub files_processed: usize,
    pub files_failed: usize,
    pub chains_written: usize,
    pub report_path: PathBuf,
}

/// Runs the sequence-extraction pipeline.
///
/// Enumerates `*.pdb` files in `input_dir` (sorted by filename), parses each
/// into a structure, derives per-chain sequences, and appends them to
/// `sequences.txt` in `output_dir` (created if absent). A file that fails to
/// parse gets an error-marker block in the report and is skipped; the batch
/// continues. A missing input directory or an unwritable report is fatal.
#[instrument(skip_all, name = "extract_workflow")]
pub fn run(
    input_dir: &Path,
    output_dir: &Path,
    reporter: &ProgressReporter,
) -> Result<ExtractSummary, ExtractError> {
    if !input_dir.is_dir() {
        return Err(ExtractError::InputDirNotFound {
            path: input_dir.to_path_buf(),
        });
    }
    fs::create_dir_all(output_dir)?;

    let mut structure_paths: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == STRUCTURE_EXTENSION)
        })
        .collect();
    structure_paths.sort();

    let report_path = output_dir.join(REPORT_FILE_NAME);
    let mut report = SequenceReport::new(BufWriter::new(File::create(&report_path)?));
    info!(
        "Extracting sequences from {} structure file(s) into {:?}",
        structure_paths.len(),
        report_path
    );
    reporter.report(Progress::BatchStart {
        total_files: structure_paths.len() as u64,
    });

    let peptide_builder = PeptideBuilder::new();
    let mut summary = ExtractSummary {
        report_path: report_path.clone(),
        ..Default::default()
    };

    for path in &structure_paths {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match PdbFile::read_from_path(path) {
            Ok(structure) => {
                report.write_header(&filename)?;
                for model in structure.models() {
                    for chain in model.chains() {
                        let sequence = peptide_builder.chain_sequence(chain);
                        if !sequence.is_empty() {
                            report.write_chain(&filename, chain.id, &sequence)?;
                            summary.chains_written += 1;
                        }
                    }
                }
                report.write_separator()?;
                summary.files_processed += 1;
            }
            Err(e) => {
                warn!("Error processing {}: {}", filename, e);
                reporter.report(Progress::Message(format!(
                    "Error processing {}: {}",
                    filename, e
                )));
                report.write_error(&filename, &e)?;
                summary.files_failed += 1;
            }
        }
        reporter.report(Progress::FileProcessed);
    }

    report.flush()?;
    reporter.report(Progress::BatchFinish);
    info!(
        "Extraction finished: {} processed, {} failed, {} chain(s) written.",
        summary.files_processed, summary.files_failed, summary.chains_written
    );
    Ok(summary)
}
