use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use gerg_mcmc::{run as run_chain, RunConfig, RunManifest};
use tracing::info;

use super::state::load_inputs;

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// YAML configuration describing the sampler run.
    #[arg(long)]
    pub config: PathBuf,
    /// JSON state file with the initial network and optional index sets.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// Output directory for run artefacts.
    #[arg(long)]
    pub out: PathBuf,
    /// Overrides `seed_policy.master_seed` from the configuration.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &SampleArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let mut config = RunConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.seed_policy.master_seed = seed;
    }
    let inputs = load_inputs(&args.input)?;

    let outcome = run_chain(&config, &inputs)?;
    let output = &config.output;

    write_json(args.out.join("summary.json"), &outcome.summary)?;
    write_json(
        args.out.join(&output.final_network_file),
        &outcome.summary.final_network,
    )?;
    outcome
        .trail
        .write_snapshots_csv(args.out.join(&output.snapshots_file))?;
    outcome
        .trail
        .write_trace_csv(args.out.join(&output.trace_file))?;
    let artefacts = vec![
        PathBuf::from("summary.json"),
        output.snapshots_file.clone(),
        output.trace_file.clone(),
        output.networks_file.clone(),
        output.final_network_file.clone(),
    ];
    let manifest = RunManifest::for_run(
        &config,
        &outcome.summary,
        inputs.sets.triples.len(),
        inputs.sets.pairs.len(),
        artefacts,
    );
    manifest.write(&args.out.join(&output.manifest_file))?;

    let bundle = outcome.trail.into_bundle();
    write_json(args.out.join(&output.networks_file), &bundle.networks)?;
    info!(out = %args.out.display(), "artefacts written");
    Ok(())
}

fn write_json<P: AsRef<Path>, T: serde::Serialize>(
    path: P,
    value: &T,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
