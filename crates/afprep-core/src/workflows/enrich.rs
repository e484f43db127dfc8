use super::progress::{Progress, ProgressReporter};
use crate::core::jobs::descriptor::JobDescriptor;
use crate::core::jobs::template::{ReferenceError, TemplateSnapshot};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("Failed to load reference file '{}': {source}", path.display())]
    Reference {
        path: PathBuf,
        #[source]
        source: ReferenceError,
    },

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Where the enrichment pipeline finds its reference and its targets.
///
/// The defaults reproduce the zero-argument contract of the pipeline: a
/// reference job next to the working directory and a folder of target jobs.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichConfig {
    pub reference_file: PathBuf,
    pub input_dir: PathBuf,
    pub pattern: String,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            reference_file: PathBuf::from("example.json"),
            input_dir: PathBuf::from("./PDGFR_input"),
            pattern: "*.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichSummary {
    pub files_updated: usize,
    pub files_skipped: usize,
}

/// Runs the JSON-enrichment pipeline.
///
/// Captures the template snapshot from the reference file first; any failure
/// there is fatal and happens before a single target is touched. Then every
/// file matching the glob pattern under the input directory is loaded,
/// rewritten via [`TemplateSnapshot::apply_to`], and written back in place
/// with 2-space pretty printing. A target that fails to load or write is
/// logged and skipped; the batch continues. Running twice is idempotent.
#[instrument(skip_all, name = "enrich_workflow")]
pub fn run(config: &EnrichConfig, reporter: &ProgressReporter) -> Result<EnrichSummary, EnrichError> {
    let snapshot =
        TemplateSnapshot::from_reference(&config.reference_file).map_err(|source| {
            EnrichError::Reference {
                path: config.reference_file.clone(),
                source,
            }
        })?;
    info!(
        "Template snapshot captured from {:?} (unpaired: {}, paired: {}, templates: {})",
        config.reference_file,
        snapshot.unpaired_msa.is_some(),
        snapshot.paired_msa.is_some(),
        snapshot.templates.is_some(),
    );

    let pattern = config.input_dir.join(&config.pattern);
    let targets: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable glob entry: {}", e);
                None
            }
        })
        .collect();

    info!("Enriching {} job file(s) under {:?}", targets.len(), config.input_dir);
    reporter.report(Progress::BatchStart {
        total_files: targets.len() as u64,
    });

    let mut summary = EnrichSummary::default();
    for path in &targets {
        match update_job_file(path, &snapshot) {
            Ok(()) => summary.files_updated += 1,
            Err(e) => {
                warn!("Skipping {:?}: {}", path, e);
                reporter.report(Progress::Message(format!(
                    "Skipping {}: {}",
                    path.display(),
                    e
                )));
                summary.files_skipped += 1;
            }
        }
        reporter.report(Progress::FileProcessed);
    }

    reporter.report(Progress::BatchFinish);
    info!(
        "Enrichment finished: {} updated, {} skipped.",
        summary.files_updated, summary.files_skipped
    );
    Ok(summary)
}

#[derive(Debug, Error)]
enum UpdateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn update_job_file(path: &Path, snapshot: &TemplateSnapshot) -> Result<(), UpdateError> {
    let mut job: JobDescriptor = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    snapshot.apply_to(&mut job);
    // serde_json pretty printing is 2-space indented and leaves non-ASCII
    // characters unescaped, matching the on-disk format of these jobs.
    let rendered = serde_json::to_string_pretty(&job)?;
    fs::write(path, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn write_json(path: &Path, value: &Value) {
        fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    }

    fn reference_value() -> Value {
        json!({
            "sequences": [
                {"protein": {"sequence": "AAA"}},
                {"protein": {
                    "sequence": "BBB",
                    "unpairedMsa": "X",
                    "pairedMsa": "Y",
                    "templates": [{"t": 1}]
                }}
            ]
        })
    }

    fn target_value(seq_a: &str, seq_b: &str) -> Value {
        json!({
            "name": "job",
            "sequences": [
                {"protein": {"id": "A", "sequence": seq_a}},
                {"protein": {"id": "B", "sequence": seq_b}}
            ]
        })
    }

    fn setup(targets: &[(&str, Value)]) -> (tempfile::TempDir, EnrichConfig) {
        let dir = tempfile::tempdir().unwrap();
        let input_dir = dir.path().join("jobs");
        fs::create_dir(&input_dir).unwrap();
        let reference_file = dir.path().join("example.json");
        write_json(&reference_file, &reference_value());
        for (name, value) in targets {
            write_json(&input_dir.join(name), value);
        }
        let config = EnrichConfig {
            reference_file,
            input_dir,
            pattern: "*.json".to_string(),
        };
        (dir, config)
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn snapshot_values_propagate_to_every_target_second_entry() {
        let (_dir, config) = setup(&[
            ("one.json", target_value("MKV", "QRS")),
            ("two.json", target_value("GGG", "HHH")),
        ]);
        let summary = run(&config, &ProgressReporter::new()).unwrap();
        assert_eq!(summary.files_updated, 2);
        assert_eq!(summary.files_skipped, 0);

        for name in ["one.json", "two.json"] {
            let job = read_json(&config.input_dir.join(name));
            let second = &job["sequences"][1]["protein"];
            assert_eq!(second["unpairedMsa"], "X");
            assert_eq!(second["pairedMsa"], "Y");
            assert_eq!(second["templates"], json!([{"t": 1}]));
        }
    }

    #[test]
    fn first_entry_gets_its_own_pseudo_alignment() {
        let (_dir, config) = setup(&[("one.json", target_value("MKV", "QRS"))]);
        run(&config, &ProgressReporter::new()).unwrap();

        let job = read_json(&config.input_dir.join("one.json"));
        let first = &job["sequences"][0]["protein"];
        assert_eq!(first["unpairedMsa"], ">query\nMKV\n");
        assert_eq!(first["pairedMsa"], ">query\nMKV\n");
        assert!(first.get("templates").is_none());
    }

    #[test]
    fn unparseable_target_is_skipped_and_left_untouched() {
        let (_dir, config) = setup(&[("good.json", target_value("MKV", "QRS"))]);
        let bad_path = config.input_dir.join("bad.json");
        fs::write(&bad_path, "{ not json").unwrap();

        let summary = run(&config, &ProgressReporter::new()).unwrap();
        assert_eq!(summary.files_updated, 1);
        assert_eq!(summary.files_skipped, 1);
        assert_eq!(fs::read_to_string(&bad_path).unwrap(), "{ not json");
    }

    #[test]
    fn running_twice_is_idempotent() {
        let (_dir, config) = setup(&[("one.json", target_value("MKV", "QRS"))]);
        run(&config, &ProgressReporter::new()).unwrap();
        let first_pass = fs::read_to_string(config.input_dir.join("one.json")).unwrap();
        run(&config, &ProgressReporter::new()).unwrap();
        let second_pass = fs::read_to_string(config.input_dir.join("one.json")).unwrap();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn one_entry_reference_aborts_before_modifying_any_target() {
        let (_dir, mut config) = setup(&[("one.json", target_value("MKV", "QRS"))]);
        write_json(
            &config.reference_file,
            &json!({"sequences": [{"protein": {"sequence": "AAA"}}]}),
        );
        let before = fs::read_to_string(config.input_dir.join("one.json")).unwrap();

        let err = run(&config, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EnrichError::Reference { .. }));
        let after = fs::read_to_string(config.input_dir.join("one.json")).unwrap();
        assert_eq!(before, after);

        // A missing reference is equally fatal.
        config.reference_file = config.reference_file.with_extension("missing");
        assert!(run(&config, &ProgressReporter::new()).is_err());
    }

    #[test]
    fn non_ascii_content_is_preserved_unescaped() {
        let mut value = target_value("MKV", "QRS");
        value["name"] = json!("dimère-β");
        let (_dir, config) = setup(&[("one.json", value)]);
        run(&config, &ProgressReporter::new()).unwrap();

        let raw = fs::read_to_string(config.input_dir.join("one.json")).unwrap();
        assert!(raw.contains("dimère-β"));
        assert!(raw.contains("  \"sequences\""));
    }

    #[test]
    fn default_config_matches_the_deployed_layout() {
        let config = EnrichConfig::default();
        assert_eq!(config.reference_file, PathBuf::from("example.json"));
        assert_eq!(config.input_dir, PathBuf::from("./PDGFR_input"));
        assert_eq!(config.pattern, "*.json");
    }
}
