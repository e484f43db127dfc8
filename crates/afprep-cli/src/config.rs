use crate::cli::EnrichArgs;
use crate::error::{CliError, Result};
use afprep::workflows::enrich::EnrichConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Enricher settings read from a TOML file; every field optional.
///
/// Precedence when resolving the final [`EnrichConfig`]: CLI flag, then
/// config file, then compiled-in default.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialEnrichConfig {
    #[serde(rename = "reference-file")]
    reference_file: Option<PathBuf>,
    #[serde(rename = "input-dir")]
    input_dir: Option<PathBuf>,
    pattern: Option<String>,
}

impl PartialEnrichConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read config file '{}': {}", path.display(), e))
        })?;
        let config = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        debug!("Loaded enrich config from {:?}: {:?}", path, config);
        Ok(config)
    }

    pub fn merge_with_cli(self, args: &EnrichArgs) -> EnrichConfig {
        let defaults = EnrichConfig::default();
        EnrichConfig {
            reference_file: args
                .reference
                .clone()
                .or(self.reference_file)
                .unwrap_or(defaults.reference_file),
            input_dir: args
                .input_dir
                .clone()
                .or(self.input_dir)
                .unwrap_or(defaults.input_dir),
            pattern: args
                .pattern
                .clone()
                .or(self.pattern)
                .unwrap_or(defaults.pattern),
        }
    }
}

/// Resolves the enricher configuration from the optional file and CLI flags.
pub fn resolve_enrich_config(args: &EnrichArgs) -> Result<EnrichConfig> {
    let partial = match &args.config {
        Some(path) => PartialEnrichConfig::from_file(path)?,
        None => PartialEnrichConfig::default(),
    };
    Ok(partial.merge_with_cli(args))
}
