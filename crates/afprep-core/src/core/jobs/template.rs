use super::descriptor::JobDescriptor;
use super::single_sequence_msa;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Reference job has {found} sequence entries, at least 2 are required")]
    TooFewEntries { found: usize },
    /// The second `sequences` entry exists but has no `protein` mapping.
    ///
    /// Such a reference is rejected outright instead of silently capturing
    /// empty values; every target in the run would otherwise be enriched
    /// from a snapshot the reference never actually provided.
    #[error("Reference job's second sequence entry has no protein mapping")]
    MissingProtein,
}

/// The alignment data captured once from a reference job descriptor and
/// reused, read-only, for every target file in an enrichment run.
///
/// Fields are `None` when the reference's second protein entry lacks the
/// corresponding value; targets then fall back to their own trivial
/// pseudo-alignment (or an empty template list).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateSnapshot {
    pub unpaired_msa: Option<String>,
    pub paired_msa: Option<String>,
    pub templates: Option<Value>,
}

impl TemplateSnapshot {
    /// Captures the snapshot from an already-parsed reference job.
    ///
    /// # Errors
    ///
    /// Fails when the job has fewer than two `sequences` entries or the
    /// second entry has no `protein` mapping.
    pub fn from_job(job: &JobDescriptor) -> Result<Self, ReferenceError> {
        if job.sequences.len() < 2 {
            return Err(ReferenceError::TooFewEntries {
                found: job.sequences.len(),
            });
        }
        let protein = job.sequences[1]
            .protein
            .as_ref()
            .ok_or(ReferenceError::MissingProtein)?;
        Ok(Self {
            unpaired_msa: protein.unpaired_msa.clone(),
            paired_msa: protein.paired_msa.clone(),
            templates: protein.templates.clone(),
        })
    }

    /// Loads the reference file and captures the snapshot.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing, unreadable, not valid JSON, or does
    /// not contain a usable second protein entry. Any of these is fatal to
    /// an enrichment run.
    pub fn from_reference<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceError> {
        let file = File::open(path)?;
        let job: JobDescriptor = serde_json::from_reader(BufReader::new(file))?;
        Self::from_job(&job)
    }

    /// Rewrites a job's first two protein entries in place.
    ///
    /// Entry 0 gets its own single-sequence pseudo-alignment for both MSA
    /// fields. Entry 1 gets the snapshot's MSAs (falling back to its own
    /// pseudo-alignment) and the snapshot's template list (falling back to
    /// an empty list). Entries at index 2 or beyond, and entries without a
    /// `protein` mapping, are untouched.
    pub fn apply_to(&self, job: &mut JobDescriptor) {
        for (i, entry) in job.sequences.iter_mut().enumerate().take(2) {
            let Some(protein) = entry.protein.as_mut() else {
                continue;
            };
            let own_msa = single_sequence_msa(protein.sequence());
            if i == 0 {
                protein.unpaired_msa = Some(own_msa.clone());
                protein.paired_msa = Some(own_msa);
            } else {
                protein.unpaired_msa =
                    Some(self.unpaired_msa.clone().unwrap_or_else(|| own_msa.clone()));
                protein.paired_msa = Some(self.paired_msa.clone().unwrap_or(own_msa));
                protein.templates = Some(
                    self.templates
                        .clone()
                        .unwrap_or_else(|| Value::Array(Vec::new())),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn job(value: serde_json::Value) -> JobDescriptor {
        serde_json::from_value(value).unwrap()
    }

    fn reference_job() -> JobDescriptor {
        job(json!({
            "sequences": [
                {"protein": {"sequence": "AAA"}},
                {"protein": {
                    "sequence": "BBB",
                    "unpairedMsa": "X",
                    "pairedMsa": "Y",
                    "templates": [{"t": 1}]
                }}
            ]
        }))
    }

    #[test]
    fn snapshot_captures_the_second_entry_fields() {
        let snapshot = TemplateSnapshot::from_job(&reference_job()).unwrap();
        assert_eq!(snapshot.unpaired_msa.as_deref(), Some("X"));
        assert_eq!(snapshot.paired_msa.as_deref(), Some("Y"));
        assert_eq!(snapshot.templates, Some(json!([{"t": 1}])));
    }

    #[test]
    fn a_single_entry_reference_is_rejected() {
        let single = job(json!({"sequences": [{"protein": {"sequence": "AAA"}}]}));
        assert!(matches!(
            TemplateSnapshot::from_job(&single),
            Err(ReferenceError::TooFewEntries { found: 1 })
        ));
    }

    #[test]
    fn a_second_entry_without_protein_is_rejected() {
        let bad = job(json!({
            "sequences": [{"protein": {"sequence": "AAA"}}, {"ligand": {}}]
        }));
        assert!(matches!(
            TemplateSnapshot::from_job(&bad),
            Err(ReferenceError::MissingProtein)
        ));
    }

    #[test]
    fn apply_rewrites_first_entry_with_its_own_pseudo_msa() {
        let snapshot = TemplateSnapshot::from_job(&reference_job()).unwrap();
        let mut target = job(json!({
            "sequences": [
                {"protein": {"sequence": "MKV"}},
                {"protein": {"sequence": "QRS"}}
            ]
        }));
        snapshot.apply_to(&mut target);

        let first = target.sequences[0].protein.as_ref().unwrap();
        assert_eq!(first.unpaired_msa.as_deref(), Some(">query\nMKV\n"));
        assert_eq!(first.paired_msa.as_deref(), Some(">query\nMKV\n"));
        assert!(first.templates.is_none());
    }

    #[test]
    fn apply_rewrites_second_entry_from_the_snapshot() {
        let snapshot = TemplateSnapshot::from_job(&reference_job()).unwrap();
        let mut target = job(json!({
            "sequences": [
                {"protein": {"sequence": "MKV"}},
                {"protein": {"sequence": "QRS"}}
            ]
        }));
        snapshot.apply_to(&mut target);

        let second = target.sequences[1].protein.as_ref().unwrap();
        assert_eq!(second.unpaired_msa.as_deref(), Some("X"));
        assert_eq!(second.paired_msa.as_deref(), Some("Y"));
        assert_eq!(second.templates, Some(json!([{"t": 1}])));
    }

    #[test]
    fn empty_snapshot_falls_back_to_pseudo_msa_and_empty_templates() {
        let snapshot = TemplateSnapshot::default();
        let mut target = job(json!({
            "sequences": [
                {"protein": {"sequence": "MKV"}},
                {"protein": {"sequence": "QRS"}}
            ]
        }));
        snapshot.apply_to(&mut target);

        let second = target.sequences[1].protein.as_ref().unwrap();
        assert_eq!(second.unpaired_msa.as_deref(), Some(">query\nQRS\n"));
        assert_eq!(second.paired_msa.as_deref(), Some(">query\nQRS\n"));
        assert_eq!(second.templates, Some(json!([])));
    }

    #[test]
    fn entries_beyond_index_one_are_untouched() {
        let snapshot = TemplateSnapshot::from_job(&reference_job()).unwrap();
        let mut target = job(json!({
            "sequences": [
                {"protein": {"sequence": "MKV"}},
                {"protein": {"sequence": "QRS"}},
                {"protein": {"sequence": "ZZZ"}}
            ]
        }));
        snapshot.apply_to(&mut target);

        let third = target.sequences[2].protein.as_ref().unwrap();
        assert_eq!(third.sequence(), "ZZZ");
        assert!(third.unpaired_msa.is_none());
        assert!(third.templates.is_none());
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let snapshot = TemplateSnapshot::from_job(&reference_job()).unwrap();
        let mut target = job(json!({
            "sequences": [
                {"protein": {"sequence": "MKV"}},
                {"protein": {"sequence": "QRS"}}
            ]
        }));
        snapshot.apply_to(&mut target);
        let once = target.clone();
        snapshot.apply_to(&mut target);
        assert_eq!(target, once);
    }
}
