use std::fs;
use std::path::{Path, PathBuf};

use gerg_core::errors::{ErrorInfo, GergError};
use gerg_stats::Model;
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing a sampler run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of MH sweeps to execute.
    pub iterations: usize,
    /// Standard deviation of the truncated-normal proposal.
    #[serde(default = "default_proposal_sigma")]
    pub proposal_sigma: f64,
    /// Sweeps between recorded snapshots.
    #[serde(default = "default_snapshot_interval")]
    pub snapshot_interval: usize,
    /// Preallocated number of snapshot slots. Defaults to `iterations / snapshot_interval`.
    #[serde(default)]
    pub snapshot_capacity: Option<usize>,
    /// Upper bound on normal draws per cell before a proposal is abandoned.
    #[serde(default = "default_max_rejection_draws")]
    pub max_rejection_draws: usize,
    /// Exponential-family model driving the chain.
    #[serde(default)]
    pub model: Model,
    /// Seed of the uniform stream.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
    /// Artefact filenames used by the CLI.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_proposal_sigma() -> f64 {
    0.1
}

fn default_snapshot_interval() -> usize {
    1
}

fn default_max_rejection_draws() -> usize {
    1_000_000
}

impl RunConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GergError> {
        serde_yaml::from_str(yaml)
            .map_err(|err| GergError::Serde(ErrorInfo::new("config-parse", err.to_string())))
    }

    /// Loads a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, GergError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            GergError::Serde(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Self::from_yaml_str(&contents).map_err(|err| match err {
            GergError::Serde(info) => {
                GergError::Serde(info.with_context("path", path.display()))
            }
            other => other,
        })
    }

    /// Renders the configuration as YAML.
    pub fn to_yaml_string(&self) -> Result<String, GergError> {
        serde_yaml::to_string(self)
            .map_err(|err| GergError::Serde(ErrorInfo::new("config-serialize", err.to_string())))
    }

    /// Number of snapshots the run will record.
    pub fn expected_snapshots(&self) -> usize {
        if self.snapshot_interval == 0 {
            0
        } else {
            self.iterations / self.snapshot_interval
        }
    }

    /// Declared capacity, falling back to the expected snapshot count.
    pub fn resolved_capacity(&self) -> usize {
        self.snapshot_capacity
            .unwrap_or_else(|| self.expected_snapshots())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            proposal_sigma: default_proposal_sigma(),
            snapshot_interval: default_snapshot_interval(),
            snapshot_capacity: None,
            max_rejection_draws: default_max_rejection_draws(),
            model: Model::default(),
            seed_policy: SeedPolicy::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Seed handed to the uniform stream.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label recorded in manifests.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0x05EE_D5EE_DD15_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}

/// Artefact layout inside a run directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Snapshot statistics CSV.
    #[serde(default = "default_snapshots_file")]
    pub snapshots_file: PathBuf,
    /// Per-iteration accept/reject CSV.
    #[serde(default = "default_trace_file")]
    pub trace_file: PathBuf,
    /// Snapshot networks as JSON.
    #[serde(default = "default_networks_file")]
    pub networks_file: PathBuf,
    /// Final chain state as JSON.
    #[serde(default = "default_final_network_file")]
    pub final_network_file: PathBuf,
    /// Run manifest.
    #[serde(default = "default_manifest_file")]
    pub manifest_file: PathBuf,
}

fn default_snapshots_file() -> PathBuf {
    PathBuf::from("snapshots.csv")
}

fn default_trace_file() -> PathBuf {
    PathBuf::from("accept_trace.csv")
}

fn default_networks_file() -> PathBuf {
    PathBuf::from("networks.json")
}

fn default_final_network_file() -> PathBuf {
    PathBuf::from("final_network.json")
}

fn default_manifest_file() -> PathBuf {
    PathBuf::from("manifest.json")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            snapshots_file: default_snapshots_file(),
            trace_file: default_trace_file(),
            networks_file: default_networks_file(),
            final_network_file: default_final_network_file(),
            manifest_file: default_manifest_file(),
        }
    }
}
