use std::error::Error;
use std::fs;
use std::path::Path;

use gerg_mcmc::ChainInputs;
use gerg_stats::{IndexSets, Network, PairSet, TripleSet};
use serde::Deserialize;

/// On-disk initial state: a square weight matrix plus optional index sets.
///
/// Missing `triples`/`pairs` fall back to every combination of nodes.
#[derive(Debug, Deserialize)]
pub struct StateFile {
    #[serde(default)]
    pub node_count: Option<usize>,
    pub network: Network,
    #[serde(default)]
    pub triples: Option<TripleSet>,
    #[serde(default)]
    pub pairs: Option<PairSet>,
}

impl StateFile {
    pub fn into_inputs(self) -> ChainInputs {
        let nodes = self.network.nodes();
        let sets = IndexSets::new(
            self.triples.unwrap_or_else(|| TripleSet::all(nodes)),
            self.pairs.unwrap_or_else(|| PairSet::all(nodes)),
        );
        ChainInputs {
            node_count: self.node_count.unwrap_or(nodes),
            network: self.network,
            sets,
        }
    }
}

pub fn load_inputs(path: &Path) -> Result<ChainInputs, Box<dyn Error>> {
    let state: StateFile = serde_json::from_str(&fs::read_to_string(path)?)?;
    Ok(state.into_inputs())
}
