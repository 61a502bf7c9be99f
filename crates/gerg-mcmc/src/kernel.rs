use gerg_core::errors::{ErrorInfo, GergError};
use gerg_core::{RngHandle, UniformSource};
use gerg_stats::{IndexSets, Network, CLAMP_HIGH, CLAMP_LOW};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::config::RunConfig;
use crate::energy::{self, AcceptanceRatio};
use crate::proposal;
use crate::trail::{SampleTrail, Snapshot};

/// Starting state and index sets for a chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainInputs {
    /// Declared network dimension; must match `network`.
    pub node_count: usize,
    /// Initial network.
    pub network: Network,
    /// Triple and pair index sets evaluated by the model.
    pub sets: IndexSets,
}

impl ChainInputs {
    /// Bundles a network with index sets, taking the node count from the network.
    pub fn new(network: Network, sets: IndexSets) -> Self {
        Self {
            node_count: network.nodes(),
            network,
            sets,
        }
    }

    /// Uses the full combinatorial index sets for the network.
    pub fn complete(network: Network) -> Self {
        let sets = IndexSets::complete(network.nodes());
        Self::new(network, sets)
    }
}

/// Result of the joint accept/reject decision for one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// Every proposed off-diagonal weight replaced the current one.
    Accepted,
    /// The network was left unchanged.
    Rejected,
}

/// Diagnostics for a single sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// One-based iteration number.
    pub iteration: usize,
    /// Decision taken for the sweep.
    pub outcome: StepOutcome,
    /// Terms of the log acceptance ratio.
    pub ratio: AcceptanceRatio,
    /// Uniform variate compared against the ratio.
    pub uniform: f64,
    /// Normal draws consumed by the proposal.
    pub draws: usize,
    /// Whether a snapshot was written after this sweep.
    pub snapshot_taken: bool,
}

/// Summary returned to callers after a run completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Sweeps executed.
    pub iterations: usize,
    /// Fraction of sweeps accepted.
    pub acceptance_rate: f64,
    /// Snapshots written to the trail.
    pub snapshots_recorded: usize,
    /// Declared snapshot capacity.
    pub snapshot_capacity: usize,
    /// Normal draws consumed across all proposals.
    pub proposal_draws: usize,
    /// Mean off-diagonal weight of the final state.
    pub final_mean_weight: f64,
    /// Final chain state.
    pub final_network: Network,
}

/// Everything produced by [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Aggregate summary.
    pub summary: RunSummary,
    /// Snapshots and accept trace.
    pub trail: SampleTrail,
}

/// Stateful MH chain over weighted networks.
pub struct Sampler<'a, U> {
    config: &'a RunConfig,
    sets: &'a IndexSets,
    state: Network,
    uniforms: U,
    trail: SampleTrail,
    iteration: usize,
    since_snapshot: usize,
    proposal_draws: usize,
}

impl<'a, U: UniformSource> Sampler<'a, U> {
    /// Validates the inputs and prepares a chain positioned before its first sweep.
    pub fn new(config: &'a RunConfig, inputs: &'a ChainInputs, uniforms: U) -> Result<Self, GergError> {
        validate(config, inputs)?;
        let capacity = config.resolved_capacity();
        Ok(Self {
            config,
            sets: &inputs.sets,
            state: inputs.network.clone(),
            uniforms,
            trail: SampleTrail::with_capacity(inputs.node_count, capacity, config.iterations),
            iteration: 0,
            since_snapshot: 0,
            proposal_draws: 0,
        })
    }

    /// Current chain state.
    pub fn state(&self) -> &Network {
        &self.state
    }

    /// Sweeps executed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Trail recorded so far.
    pub fn trail(&self) -> &SampleTrail {
        &self.trail
    }

    /// Runs one full sweep: propose every cell, evaluate, decide, record.
    pub fn step(&mut self) -> Result<StepReport, GergError> {
        let sweep = proposal::propose_sweep(
            &self.state,
            self.config.proposal_sigma,
            self.config.max_rejection_draws,
            &mut self.uniforms,
        )?;
        let ratio = AcceptanceRatio::evaluate(
            &self.config.model,
            self.sets,
            &self.state,
            &sweep.candidate,
            sweep.log_correction,
        );
        if ratio.log_ratio.is_nan() {
            return Err(GergError::NumericDegeneracy(
                ErrorInfo::new("nan-log-ratio", "log acceptance ratio is NaN")
                    .with_context("iteration", self.iteration + 1)
                    .with_context("current_energy", ratio.current_energy)
                    .with_context("proposed_energy", ratio.proposed_energy)
                    .with_context("log_correction", ratio.log_correction),
            ));
        }

        let uniform = self.uniforms.next_uniform();
        let outcome = if energy::accepts(ratio.log_ratio, uniform) {
            // The candidate was cloned from the state, so its diagonal is unchanged.
            self.state = sweep.candidate;
            StepOutcome::Accepted
        } else {
            StepOutcome::Rejected
        };

        let accepted = outcome == StepOutcome::Accepted;
        self.iteration += 1;
        self.proposal_draws += sweep.draws;
        self.trail.record_outcome(accepted);
        trace!(
            iteration = self.iteration,
            log_ratio = ratio.log_ratio,
            log_correction = ratio.log_correction,
            accepted,
            "sweep evaluated"
        );

        self.since_snapshot += 1;
        let snapshot_taken = self.since_snapshot == self.config.snapshot_interval;
        if snapshot_taken {
            self.record_snapshot()?;
            self.since_snapshot = 0;
        }

        Ok(StepReport {
            iteration: self.iteration,
            outcome,
            ratio,
            uniform,
            draws: sweep.draws,
            snapshot_taken,
        })
    }

    fn record_snapshot(&mut self) -> Result<(), GergError> {
        let statistics = self
            .config
            .model
            .snapshot_statistics(&self.state, self.sets);
        let mean_weight = self.state.mean_off_diagonal();
        debug!(
            iteration = self.iteration,
            slot = self.trail.snapshots().len(),
            mean_weight,
            "snapshot recorded"
        );
        self.trail.push_snapshot(Snapshot {
            iteration: self.iteration,
            network: self.state.clone(),
            statistics,
            mean_weight,
        })
    }

    /// Consumes the sampler, returning the summary and the trail.
    pub fn finish(self) -> RunOutcome {
        let summary = RunSummary {
            iterations: self.iteration,
            acceptance_rate: self.trail.acceptance_rate(),
            snapshots_recorded: self.trail.snapshots().len(),
            snapshot_capacity: self.trail.capacity(),
            proposal_draws: self.proposal_draws,
            final_mean_weight: self.state.mean_off_diagonal(),
            final_network: self.state,
        };
        RunOutcome {
            summary,
            trail: self.trail,
        }
    }
}

/// Runs the sampler from scratch, seeding the uniform stream from the configuration.
pub fn run(config: &RunConfig, inputs: &ChainInputs) -> Result<RunOutcome, GergError> {
    let rng = RngHandle::from_seed(config.seed_policy.master_seed);
    run_with_source(config, inputs, rng)
}

/// Runs the sampler against an injected uniform source.
pub fn run_with_source<U: UniformSource>(
    config: &RunConfig,
    inputs: &ChainInputs,
    uniforms: U,
) -> Result<RunOutcome, GergError> {
    let mut sampler = Sampler::new(config, inputs, uniforms)?;
    info!(
        iterations = config.iterations,
        nodes = inputs.node_count,
        sigma = config.proposal_sigma,
        interval = config.snapshot_interval,
        capacity = sampler.trail.capacity(),
        seed = config.seed_policy.master_seed,
        "starting chain"
    );
    for _ in 0..config.iterations {
        sampler.step()?;
    }
    let outcome = sampler.finish();
    info!(
        acceptance_rate = outcome.summary.acceptance_rate,
        snapshots = outcome.summary.snapshots_recorded,
        final_mean_weight = outcome.summary.final_mean_weight,
        "chain finished"
    );
    Ok(outcome)
}

/// Checks run parameters and chain inputs before any uniform is consumed.
pub fn validate(config: &RunConfig, inputs: &ChainInputs) -> Result<(), GergError> {
    let sigma = config.proposal_sigma;
    if !(sigma > 0.0 && sigma.is_finite()) {
        return Err(GergError::InvalidArgument(
            ErrorInfo::new("sigma-non-positive", "proposal_sigma must be finite and > 0")
                .with_context("proposal_sigma", sigma),
        ));
    }
    if inputs.node_count < 2 {
        return Err(GergError::InvalidArgument(
            ErrorInfo::new("too-few-nodes", "a network needs at least two nodes")
                .with_context("node_count", inputs.node_count),
        ));
    }
    if inputs.network.nodes() != inputs.node_count {
        return Err(GergError::InvalidArgument(
            ErrorInfo::new("dimension-mismatch", "initial network does not match node_count")
                .with_context("node_count", inputs.node_count)
                .with_context("network_nodes", inputs.network.nodes()),
        ));
    }
    if config.snapshot_interval == 0 {
        return Err(GergError::InvalidArgument(ErrorInfo::new(
            "interval-zero",
            "snapshot_interval must be at least 1",
        )));
    }
    if config.max_rejection_draws == 0 {
        return Err(GergError::InvalidArgument(ErrorInfo::new(
            "rejection-budget-zero",
            "max_rejection_draws must be at least 1",
        )));
    }
    for (i, j) in inputs.network.off_diagonal_cells() {
        let weight = inputs.network.get(i, j);
        if !weight.is_finite() {
            return Err(GergError::InvalidArgument(
                ErrorInfo::new("non-finite-weight", "initial network holds a non-finite weight")
                    .with_context("row", i)
                    .with_context("column", j),
            ));
        }
        if !(CLAMP_LOW..=CLAMP_HIGH).contains(&weight) {
            return Err(GergError::InvalidArgument(
                ErrorInfo::new("weight-out-of-range", "initial weight lies outside the clamp band")
                    .with_context("row", i)
                    .with_context("column", j)
                    .with_context("weight", weight)
                    .with_hint(format!("off-diagonal weights must lie in [{CLAMP_LOW}, {CLAMP_HIGH}]")),
            ));
        }
    }
    inputs.sets.validate(inputs.node_count)?;

    let expected = config.expected_snapshots();
    let capacity = config.resolved_capacity();
    if expected > capacity {
        return Err(GergError::CapacityExceeded(
            ErrorInfo::new("capacity-too-small", "run would record more snapshots than slots")
                .with_context("iterations", config.iterations)
                .with_context("snapshot_interval", config.snapshot_interval)
                .with_context("expected", expected)
                .with_context("capacity", capacity)
                .with_hint("raise snapshot_capacity or snapshot_interval"),
        ));
    }
    Ok(())
}
