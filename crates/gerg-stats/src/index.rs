use gerg_core::errors::{ErrorInfo, GergError};
use serde::{Deserialize, Serialize};

/// Ordered node triples contributing to the 2-star and triad statistics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripleSet {
    triples: Vec<[usize; 3]>,
}

impl TripleSet {
    /// Wraps an explicit list of triples. Indices are checked by [`TripleSet::validate`].
    pub fn new(triples: Vec<[usize; 3]>) -> Self {
        Self { triples }
    }

    /// Every `(a, b, c)` with `a < b < c < nodes`, in lexicographic order.
    pub fn all(nodes: usize) -> Self {
        let mut triples = Vec::new();
        for a in 0..nodes {
            for b in a + 1..nodes {
                for c in b + 1..nodes {
                    triples.push([a, b, c]);
                }
            }
        }
        Self { triples }
    }

    /// Number of triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns `true` when the set holds no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates the triples in their stored order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize; 3]> {
        self.triples.iter()
    }

    /// Checks that every index addresses a node of an `nodes`-node network.
    pub fn validate(&self, nodes: usize) -> Result<(), GergError> {
        check_rows("triples", self.triples.iter().map(|row| row.as_slice()), nodes)
    }
}

/// Ordered node pairs contributing to the dyadic statistics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairSet {
    pairs: Vec<[usize; 2]>,
}

impl PairSet {
    /// Wraps an explicit list of pairs. Indices are checked by [`PairSet::validate`].
    pub fn new(pairs: Vec<[usize; 2]>) -> Self {
        Self { pairs }
    }

    /// Every `(a, b)` with `a < b < nodes`, in lexicographic order.
    pub fn all(nodes: usize) -> Self {
        let mut pairs = Vec::new();
        for a in 0..nodes {
            for b in a + 1..nodes {
                pairs.push([a, b]);
            }
        }
        Self { pairs }
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` when the set holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates the pairs in their stored order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize; 2]> {
        self.pairs.iter()
    }

    /// Checks that every index addresses a node of an `nodes`-node network.
    pub fn validate(&self, nodes: usize) -> Result<(), GergError> {
        check_rows("pairs", self.pairs.iter().map(|row| row.as_slice()), nodes)
    }
}

/// Triple and pair index sets evaluated together by a model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexSets {
    /// Node triples for 2-star and triad statistics.
    #[serde(default)]
    pub triples: TripleSet,
    /// Node pairs for reciprocity and density.
    #[serde(default)]
    pub pairs: PairSet,
}

impl IndexSets {
    /// Bundles explicit triple and pair sets.
    pub fn new(triples: TripleSet, pairs: PairSet) -> Self {
        Self { triples, pairs }
    }

    /// Full combinatorial index sets for an `nodes`-node network.
    pub fn complete(nodes: usize) -> Self {
        Self {
            triples: TripleSet::all(nodes),
            pairs: PairSet::all(nodes),
        }
    }

    /// Validates both sets against the node count.
    pub fn validate(&self, nodes: usize) -> Result<(), GergError> {
        self.triples.validate(nodes)?;
        self.pairs.validate(nodes)
    }
}

fn check_rows<'a>(
    kind: &str,
    rows: impl Iterator<Item = &'a [usize]>,
    nodes: usize,
) -> Result<(), GergError> {
    for (row_index, row) in rows.enumerate() {
        if let Some((column, &index)) = row.iter().enumerate().find(|&(_, &idx)| idx >= nodes) {
            return Err(GergError::InvalidArgument(
                ErrorInfo::new("index-out-of-range", format!("{kind} reference a missing node"))
                    .with_context("set", kind)
                    .with_context("row", row_index)
                    .with_context("column", column)
                    .with_context("index", index)
                    .with_context("node_count", nodes),
            ));
        }
    }
    Ok(())
}
