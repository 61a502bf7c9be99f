#![deny(missing_docs)]

//! Metropolis-Hastings sampler for directed networks with weights in `(0, 1)`.
//!
//! Each sweep proposes a truncated-normal move for every off-diagonal cell,
//! corrects for the asymmetric truncation window, and accepts or rejects the
//! whole network at once against the model energy.

/// YAML configuration schema and defaults.
pub mod config;
/// Acceptance ratio evaluation and the joint decision rule.
pub mod energy;
/// Sampling kernel and public `run` entry points.
pub mod kernel;
/// Run manifest serialization helpers.
pub mod manifest;
/// Truncated-normal proposals and their density correction.
pub mod proposal;
/// Snapshot storage and tabular exports.
pub mod trail;
/// Uniform-driven normal variates and the approximate normal CDF.
pub mod variates;

pub use config::{OutputConfig, RunConfig, SeedPolicy};
pub use energy::{accepts, AcceptanceRatio};
pub use kernel::{
    run, run_with_source, validate, ChainInputs, RunOutcome, RunSummary, Sampler, StepOutcome,
    StepReport,
};
pub use manifest::RunManifest;
pub use proposal::{propose_cell, propose_sweep, CellProposal, SweepProposal};
pub use trail::{ResultBundle, SampleTrail, Snapshot};
pub use variates::{approx_erf, normal_cdf, normal_pdf, NormalPair};
