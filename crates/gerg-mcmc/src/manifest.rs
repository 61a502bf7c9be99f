use std::fs;
use std::path::{Path, PathBuf};

use gerg_core::errors::{ErrorInfo, GergError};
use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::kernel::RunSummary;

/// Structured manifest describing a completed sampler run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    /// Configuration used for the run.
    pub config: RunConfig,
    /// Seed of the uniform stream.
    pub master_seed: u64,
    /// Optional seed label captured from the configuration.
    pub seed_label: Option<String>,
    /// Network dimension.
    pub node_count: usize,
    /// Number of triples in the index set.
    pub triple_count: usize,
    /// Number of pairs in the index set.
    pub pair_count: usize,
    /// Sweeps executed.
    pub iterations: usize,
    /// Fraction of sweeps accepted.
    pub acceptance_rate: f64,
    /// Snapshots recorded.
    pub snapshots_recorded: usize,
    /// RFC 3339 timestamp of manifest creation.
    pub created_at: String,
    /// Artefacts produced by the run, relative to the run directory.
    pub artefacts: Vec<PathBuf>,
}

impl RunManifest {
    /// Builds a manifest for a finished run, stamped with the current time.
    pub fn for_run(
        config: &RunConfig,
        summary: &RunSummary,
        triple_count: usize,
        pair_count: usize,
        artefacts: Vec<PathBuf>,
    ) -> Self {
        Self {
            config: config.clone(),
            master_seed: config.seed_policy.master_seed,
            seed_label: config.seed_policy.label.clone(),
            node_count: summary.final_network.nodes(),
            triple_count,
            pair_count,
            iterations: summary.iterations,
            acceptance_rate: summary.acceptance_rate,
            snapshots_recorded: summary.snapshots_recorded,
            created_at: chrono::Utc::now().to_rfc3339(),
            artefacts,
        }
    }

    /// Writes the manifest to a JSON file.
    pub fn write(&self, path: &Path) -> Result<(), GergError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                GergError::Serde(
                    ErrorInfo::new("manifest-mkdir", err.to_string())
                        .with_context("path", parent.display()),
                )
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            GergError::Serde(
                ErrorInfo::new("manifest-serialize", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        fs::write(path, json).map_err(|err| {
            GergError::Serde(
                ErrorInfo::new("manifest-write", err.to_string())
                    .with_context("path", path.display()),
            )
        })
    }

    /// Loads a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, GergError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            GergError::Serde(
                ErrorInfo::new("manifest-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            GergError::Serde(
                ErrorInfo::new("manifest-parse", err.to_string())
                    .with_context("path", path.display()),
            )
        })
    }
}
