use gerg_core::errors::{ErrorInfo, GergError};
use serde::{Deserialize, Serialize};

use crate::index::IndexSets;
use crate::network::Network;
use crate::statistic::{CombineMode, PerStatistic, Statistic};
use crate::terms;

/// Exponential-family model over weighted networks.
///
/// The energy (unnormalised log-density) of a network is
/// `sum_k theta[k] * stat_k(net)` over the active statistics. Exponents are
/// held for all six statistics because snapshots evaluate every statistic
/// regardless of the selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelSpec", into = "ModelSpec")]
pub struct Model {
    selector: PerStatistic<bool>,
    thetas: PerStatistic<f64>,
    alphas: PerStatistic<f64>,
    combine: CombineMode,
}

impl Model {
    /// Creates a model from per-statistic tables.
    pub fn new(
        selector: PerStatistic<bool>,
        thetas: PerStatistic<f64>,
        alphas: PerStatistic<f64>,
        combine: CombineMode,
    ) -> Self {
        Self {
            selector,
            thetas,
            alphas,
            combine,
        }
    }

    /// Creates a model from positional slot vectors (slot order of [`Statistic::ALL`]).
    pub fn from_slots(
        selector: &[bool],
        thetas: &[f64],
        alphas: &[f64],
        together: bool,
    ) -> Result<Self, GergError> {
        Ok(Self {
            selector: PerStatistic(slot_array("selector", selector)?),
            thetas: PerStatistic(slot_array("thetas", thetas)?),
            alphas: PerStatistic(slot_array("alphas", alphas)?),
            combine: CombineMode::from_together(together),
        })
    }

    /// Which statistics contribute to the energy.
    pub fn selector(&self) -> &PerStatistic<bool> {
        &self.selector
    }

    /// Natural parameters, one per statistic slot.
    pub fn thetas(&self) -> &PerStatistic<f64> {
        &self.thetas
    }

    /// Exponents, one per statistic slot.
    pub fn alphas(&self) -> &PerStatistic<f64> {
        &self.alphas
    }

    /// Combination mode shared by every statistic.
    pub fn combine(&self) -> CombineMode {
        self.combine
    }

    /// Statistics flagged active, in slot order.
    pub fn active(&self) -> impl Iterator<Item = Statistic> + '_ {
        self.selector
            .iter()
            .filter_map(|(stat, active)| active.then_some(stat))
    }

    /// Weighted sum of the active statistics.
    pub fn energy(&self, net: &Network, sets: &IndexSets) -> f64 {
        self.active()
            .map(|stat| {
                self.thetas[stat] * terms::evaluate(stat, net, sets, self.alphas[stat], self.combine)
            })
            .sum()
    }

    /// All six statistics, ignoring the selector.
    pub fn snapshot_statistics(&self, net: &Network, sets: &IndexSets) -> PerStatistic<f64> {
        terms::evaluate_all(net, sets, &self.alphas, self.combine)
    }
}

impl Default for Model {
    fn default() -> Self {
        let mut selector = PerStatistic::splat(false);
        selector[Statistic::EdgeDensity] = true;
        Self {
            selector,
            thetas: PerStatistic::splat(0.0),
            alphas: PerStatistic::splat(1.0),
            combine: CombineMode::Together,
        }
    }
}

fn slot_array<T: Copy + Default>(name: &str, values: &[T]) -> Result<[T; 6], GergError> {
    <[T; 6]>::try_from(values).map_err(|_| {
        GergError::InvalidArgument(
            ErrorInfo::new("slot-length", format!("{name} must have one entry per statistic"))
                .with_context("name", name)
                .with_context("expected", Statistic::ALL.len())
                .with_context("len", values.len()),
        )
    })
}

/// Configuration form of a single model term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSpec {
    /// Statistic the term refers to.
    pub statistic: Statistic,
    /// Coefficient applied when the term is active.
    #[serde(default)]
    pub theta: f64,
    /// Exponent used both for the energy and for snapshots.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Whether the term contributes to the energy.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_alpha() -> f64 {
    1.0
}

fn default_active() -> bool {
    true
}

/// Configuration form of a [`Model`]: named terms instead of positional slots.
///
/// Statistics not listed are inactive with exponent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Sub-term combination policy.
    #[serde(default)]
    pub combine: CombineMode,
    /// Terms keyed by statistic; each statistic may appear at most once.
    #[serde(default)]
    pub terms: Vec<TermSpec>,
}

impl TryFrom<ModelSpec> for Model {
    type Error = GergError;

    fn try_from(spec: ModelSpec) -> Result<Self, Self::Error> {
        let mut seen = PerStatistic::splat(false);
        let mut model = Model {
            selector: PerStatistic::splat(false),
            thetas: PerStatistic::splat(0.0),
            alphas: PerStatistic::splat(1.0),
            combine: spec.combine,
        };
        for term in spec.terms {
            if seen[term.statistic] {
                return Err(GergError::InvalidArgument(
                    ErrorInfo::new("duplicate-term", "statistic listed more than once")
                        .with_context("statistic", term.statistic.as_str()),
                ));
            }
            seen[term.statistic] = true;
            model.selector[term.statistic] = term.active;
            model.thetas[term.statistic] = term.theta;
            model.alphas[term.statistic] = term.alpha;
        }
        Ok(model)
    }
}

impl From<Model> for ModelSpec {
    fn from(model: Model) -> Self {
        let terms = Statistic::ALL
            .iter()
            .map(|&stat| TermSpec {
                statistic: stat,
                theta: model.thetas[stat],
                alpha: model.alphas[stat],
                active: model.selector[stat],
            })
            .collect();
        ModelSpec {
            combine: model.combine,
            terms,
        }
    }
}
