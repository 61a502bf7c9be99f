use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use gerg_core::errors::{ErrorInfo, GergError};
use gerg_stats::{Network, PerStatistic, Statistic};
use serde::{Deserialize, Serialize};

/// Network state and derived quantities recorded at a snapshot boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// One-based iteration after which the snapshot was taken.
    pub iteration: usize,
    /// Copy of the chain state, diagonal included.
    pub network: Network,
    /// All six statistics of the recorded network.
    pub statistics: PerStatistic<f64>,
    /// Mean off-diagonal weight of the recorded network.
    pub mean_weight: f64,
}

/// Fixed-capacity store of snapshots plus the per-iteration accept trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleTrail {
    nodes: usize,
    capacity: usize,
    accept_trace: Vec<bool>,
    snapshots: Vec<Snapshot>,
}

impl SampleTrail {
    /// Creates an empty trail for `nodes`-node networks with `capacity` snapshot slots.
    pub fn with_capacity(nodes: usize, capacity: usize, iterations: usize) -> Self {
        Self {
            nodes,
            capacity,
            accept_trace: Vec::with_capacity(iterations),
            snapshots: Vec::with_capacity(capacity),
        }
    }

    /// Appends the outcome of one iteration.
    pub fn record_outcome(&mut self, accepted: bool) {
        self.accept_trace.push(accepted);
    }

    /// Writes a snapshot into the next free slot.
    pub fn push_snapshot(&mut self, snapshot: Snapshot) -> Result<(), GergError> {
        if self.snapshots.len() >= self.capacity {
            return Err(GergError::CapacityExceeded(
                ErrorInfo::new("trail-full", "no free snapshot slot left")
                    .with_context("capacity", self.capacity)
                    .with_context("iteration", snapshot.iteration),
            ));
        }
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Network dimension of the recorded states.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Declared number of snapshot slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Accept (`true`) or reject (`false`) for every iteration, in order.
    pub fn accept_trace(&self) -> &[bool] {
        &self.accept_trace
    }

    /// Recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Fraction of iterations that were accepted (zero for an empty run).
    pub fn acceptance_rate(&self) -> f64 {
        if self.accept_trace.is_empty() {
            return 0.0;
        }
        let accepted = self.accept_trace.iter().filter(|&&ok| ok).count();
        accepted as f64 / self.accept_trace.len() as f64
    }

    /// Materialises the four-part result in its preallocated layout.
    ///
    /// Slots beyond the recorded snapshots are zero-filled.
    pub fn into_bundle(self) -> ResultBundle {
        let mut networks = Vec::with_capacity(self.capacity);
        let mut statistics = Vec::with_capacity(self.capacity);
        let mut mean_weights = Vec::with_capacity(self.capacity);
        for snapshot in self.snapshots {
            networks.push(snapshot.network);
            statistics.push(snapshot.statistics.values());
            mean_weights.push(snapshot.mean_weight);
        }
        while networks.len() < self.capacity {
            networks.push(Network::zeros(self.nodes));
            statistics.push([0.0; 6]);
            mean_weights.push(0.0);
        }
        ResultBundle {
            accept_trace: self.accept_trace,
            networks,
            statistics,
            mean_weights,
        }
    }

    /// Writes one CSV row per snapshot: index, iteration, six statistics, mean weight.
    pub fn write_snapshots_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), GergError> {
        let path = path.as_ref();
        self.write_snapshot_rows(path)
            .map_err(|err| io_error("snapshots-write", path, err))
    }

    /// Writes the accept trace as `iteration,accepted` rows with 0/1 values.
    pub fn write_trace_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), GergError> {
        let path = path.as_ref();
        self.write_trace_rows(path)
            .map_err(|err| io_error("trace-write", path, err))
    }

    fn write_snapshot_rows(&self, path: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        let header: Vec<&str> = Statistic::ALL.iter().map(Statistic::as_str).collect();
        writeln!(file, "snapshot,iteration,{},mean_weight", header.join(","))?;
        for (index, snapshot) in self.snapshots.iter().enumerate() {
            let values: Vec<String> = snapshot
                .statistics
                .values()
                .iter()
                .map(|value| format!("{value:.10}"))
                .collect();
            writeln!(
                file,
                "{},{},{},{:.10}",
                index,
                snapshot.iteration,
                values.join(","),
                snapshot.mean_weight
            )?;
        }
        file.flush()
    }

    fn write_trace_rows(&self, path: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        writeln!(file, "iteration,accepted")?;
        for (index, accepted) in self.accept_trace.iter().enumerate() {
            writeln!(file, "{},{}", index + 1, u8::from(*accepted))?;
        }
        file.flush()
    }
}

/// The four-part result of a run, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    /// Accept indicator per iteration.
    pub accept_trace: Vec<bool>,
    /// One network per snapshot slot.
    pub networks: Vec<Network>,
    /// Six statistics per snapshot slot, in slot order.
    pub statistics: Vec<[f64; 6]>,
    /// Mean off-diagonal weight per snapshot slot.
    pub mean_weights: Vec<f64>,
}

fn io_error(code: &str, path: &Path, err: std::io::Error) -> GergError {
    GergError::Serde(ErrorInfo::new(code, err.to_string()).with_context("path", path.display()))
}
