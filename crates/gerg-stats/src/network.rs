use std::ops::Index;

use gerg_core::errors::{ErrorInfo, GergError};
use serde::{Deserialize, Serialize};

/// Smallest off-diagonal weight a proposal may leave behind.
pub const CLAMP_LOW: f64 = 0.001;
/// Largest off-diagonal weight a proposal may leave behind.
pub const CLAMP_HIGH: f64 = 0.999;

/// Dense directed weighted network stored row-major.
///
/// Entry `(i, j)` is the weight of the edge `i -> j`. The diagonal carries
/// whatever the caller supplied and is never consulted by the statistics or
/// touched by the sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Network {
    nodes: usize,
    weights: Vec<f64>,
}

impl Network {
    /// Creates an `nodes x nodes` network with every entry set to zero.
    pub fn zeros(nodes: usize) -> Self {
        Self {
            nodes,
            weights: vec![0.0; nodes * nodes],
        }
    }

    /// Creates a network with every off-diagonal entry set to `weight` and a zero diagonal.
    pub fn uniform(nodes: usize, weight: f64) -> Self {
        let mut network = Self::zeros(nodes);
        for (i, j) in network.off_diagonal_cells() {
            network.set(i, j, weight);
        }
        network
    }

    /// Builds a network from row-major weights.
    pub fn from_row_major(nodes: usize, weights: Vec<f64>) -> Result<Self, GergError> {
        if weights.len() != nodes * nodes {
            return Err(GergError::InvalidArgument(
                ErrorInfo::new("network-shape", "weight buffer does not match node count")
                    .with_context("node_count", nodes)
                    .with_context("len", weights.len()),
            ));
        }
        Ok(Self { nodes, weights })
    }

    /// Builds a network from a square list of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, GergError> {
        let nodes = rows.len();
        let mut weights = Vec::with_capacity(nodes * nodes);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != nodes {
                return Err(GergError::InvalidArgument(
                    ErrorInfo::new("network-not-square", "every row must have one entry per node")
                        .with_context("row", row_index)
                        .with_context("row_len", row.len())
                        .with_context("node_count", nodes),
                ));
            }
            weights.extend(row);
        }
        Ok(Self { nodes, weights })
    }

    /// Number of nodes (the matrix dimension).
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Weight of the edge `from -> to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.weights[from * self.nodes + to]
    }

    /// Overwrites the weight of the edge `from -> to`.
    #[inline]
    pub fn set(&mut self, from: usize, to: usize, weight: f64) {
        self.weights[from * self.nodes + to] = weight;
    }

    /// Row-major view over all entries, diagonal included.
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Iterates the off-diagonal cells in row-major order.
    pub fn off_diagonal_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let nodes = self.nodes;
        (0..nodes).flat_map(move |i| (0..nodes).filter(move |&j| j != i).map(move |j| (i, j)))
    }

    /// Mean weight over the `n (n - 1)` off-diagonal cells.
    pub fn mean_off_diagonal(&self) -> f64 {
        if self.nodes < 2 {
            return 0.0;
        }
        let total: f64 = self
            .off_diagonal_cells()
            .map(|(i, j)| self.get(i, j))
            .sum();
        total / (self.nodes * (self.nodes - 1)) as f64
    }

    /// Returns the network as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.nodes == 0 {
            return Vec::new();
        }
        self.weights
            .chunks(self.nodes)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl Index<(usize, usize)> for Network {
    type Output = f64;

    fn index(&self, (from, to): (usize, usize)) -> &f64 {
        &self.weights[from * self.nodes + to]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Network {
    type Error = GergError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Network::from_rows(rows)
    }
}

impl From<Network> for Vec<Vec<f64>> {
    fn from(network: Network) -> Self {
        network.to_rows()
    }
}
