use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// The six sufficient statistics understood by the model, in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Statistic {
    /// Generalised outgoing 2-stars over the triple set.
    #[serde(rename = "out2star")]
    Out2Star,
    /// Generalised incoming 2-stars over the triple set.
    #[serde(rename = "in2star")]
    In2Star,
    /// Cyclic (closed) triads over the triple set.
    #[serde(rename = "ctriads")]
    ClosedTriads,
    /// Reciprocated dyads over the pair set.
    #[serde(rename = "recip")]
    Reciprocity,
    /// Transitive triads over the triple set.
    #[serde(rename = "ttriads")]
    TransitiveTriads,
    /// Total edge weight over the pair set.
    #[serde(rename = "edges")]
    EdgeDensity,
}

impl Statistic {
    /// All statistics in slot order.
    pub const ALL: [Statistic; 6] = [
        Statistic::Out2Star,
        Statistic::In2Star,
        Statistic::ClosedTriads,
        Statistic::Reciprocity,
        Statistic::TransitiveTriads,
        Statistic::EdgeDensity,
    ];

    /// Position of the statistic in selector/theta/alpha tables.
    pub const fn slot(self) -> usize {
        match self {
            Statistic::Out2Star => 0,
            Statistic::In2Star => 1,
            Statistic::ClosedTriads => 2,
            Statistic::Reciprocity => 3,
            Statistic::TransitiveTriads => 4,
            Statistic::EdgeDensity => 5,
        }
    }

    /// Stable short label used in tabular exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::Out2Star => "out2star",
            Statistic::In2Star => "in2star",
            Statistic::ClosedTriads => "ctriads",
            Statistic::Reciprocity => "recip",
            Statistic::TransitiveTriads => "ttriads",
            Statistic::EdgeDensity => "edges",
        }
    }
}

/// How the sub-terms of a statistic are combined with its exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CombineMode {
    /// Sum the sub-terms, then raise the total to `alpha`.
    #[default]
    Together,
    /// Raise each sub-term to `alpha`, then sum.
    PerTerm,
}

impl CombineMode {
    /// Maps the boolean `together` flag onto a mode.
    pub fn from_together(together: bool) -> Self {
        if together {
            CombineMode::Together
        } else {
            CombineMode::PerTerm
        }
    }

    /// Combines per-motif sub-sums according to the mode.
    pub(crate) fn combine(self, sub_sums: &[f64], alpha: f64) -> f64 {
        match self {
            CombineMode::Together => sub_sums.iter().sum::<f64>().powf(alpha),
            CombineMode::PerTerm => sub_sums.iter().map(|sum| sum.powf(alpha)).sum(),
        }
    }
}

/// One value per statistic, addressable by [`Statistic`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerStatistic<T>(pub [T; 6]);

impl<T: Copy> PerStatistic<T> {
    /// Sets every slot to `value`.
    pub fn splat(value: T) -> Self {
        Self([value; 6])
    }

    /// Iterates `(statistic, value)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Statistic, T)> + '_ {
        Statistic::ALL.iter().map(move |&stat| (stat, self[stat]))
    }

    /// Raw values in slot order.
    pub fn values(&self) -> [T; 6] {
        self.0
    }
}

impl<T: Copy + Default> Default for PerStatistic<T> {
    fn default() -> Self {
        Self([T::default(); 6])
    }
}

impl<T> Index<Statistic> for PerStatistic<T> {
    type Output = T;

    fn index(&self, stat: Statistic) -> &T {
        &self.0[stat.slot()]
    }
}

impl<T> IndexMut<Statistic> for PerStatistic<T> {
    fn index_mut(&mut self, stat: Statistic) -> &mut T {
        &mut self.0[stat.slot()]
    }
}
