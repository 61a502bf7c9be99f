#![deny(missing_docs)]

//! Weighted directed networks and the structural statistics that drive the
//! exponential-family energy of the sampler.

mod index;
mod model;
mod network;
mod serialization;
mod statistic;
mod terms;

pub use index::{IndexSets, PairSet, TripleSet};
pub use model::{Model, ModelSpec, TermSpec};
pub use network::{Network, CLAMP_HIGH, CLAMP_LOW};
pub use statistic::{CombineMode, PerStatistic, Statistic};
pub use terms::{
    closed_triads, edge_density, evaluate, evaluate_all, in_two_star, out_two_star,
    reciprocity, transitive_triads,
};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{network_from_json, network_to_json};
